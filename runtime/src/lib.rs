//! # Tasklane Runtime
//!
//! Runtime implementation for Tasklane reducers.
//!
//! This crate provides the Store runtime that coordinates reducer execution
//! and effect handling.
//!
//! ## Core Components
//!
//! - **Store**: The runtime that owns state and executes effects
//! - **Effect Executor**: Executes effect descriptions and feeds actions back to the reducer
//! - **Observers**: Callbacks that see the state after every processed `send`
//!
//! The store is synchronous: `send` reduces the action, runs every effect and
//! every follow-up action before returning. State is owned by the store and
//! only mutated through `send`.
//!
//! ## Example
//!
//! ```ignore
//! use tasklane_runtime::Store;
//!
//! let mut store = Store::new(initial_state, my_reducer, environment);
//!
//! // Send an action
//! store.send(Action::DoSomething)?;
//!
//! // Read state
//! let value = store.state(|s| s.some_field);
//! ```

use tasklane_core::{effect::Effect, reducer::Reducer};

/// Error types for the Store runtime
pub mod error {
    use thiserror::Error;

    /// Errors that can occur during Store operations
    #[derive(Error, Debug, Clone, PartialEq, Eq)]
    pub enum StoreError {
        /// Effects kept feeding actions back past the configured limit
        ///
        /// Usually a reducer that answers an action with an effect producing
        /// the same action. Queued actions are dropped; state keeps every
        /// change applied before the limit was hit.
        #[error("Effect feedback exceeded {limit} follow-up actions")]
        FeedbackLimitExceeded {
            /// Configured limit that was hit
            limit: usize,
        },
    }
}

pub use error::StoreError;

/// Configuration for Store instances
///
/// # Example
///
/// ```ignore
/// let config = StoreConfig::default().with_max_feedback_actions(8);
/// let store = Store::with_config(state, reducer, env, config);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StoreConfig {
    /// Maximum number of follow-up actions a single `send` may process
    pub max_feedback_actions: usize,
}

impl StoreConfig {
    /// Create a new configuration with custom values
    #[must_use]
    pub const fn new(max_feedback_actions: usize) -> Self {
        Self {
            max_feedback_actions,
        }
    }

    /// Set the follow-up action limit
    #[must_use]
    pub const fn with_max_feedback_actions(mut self, limit: usize) -> Self {
        self.max_feedback_actions = limit;
        self
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            max_feedback_actions: 32,
        }
    }
}

/// Store implementation
pub mod store {
    use super::{Effect, Reducer, StoreConfig, StoreError};
    use std::collections::VecDeque;

    /// Callback invoked with the state after every processed `send`
    type Observer<S> = Box<dyn FnMut(&S)>;

    /// The Store - runtime coordinator for a reducer
    ///
    /// The Store manages:
    /// 1. State (owned, mutated only through `send`)
    /// 2. Reducer (business logic)
    /// 3. Environment (injected dependencies)
    /// 4. Effect execution (with feedback loop)
    ///
    /// # Type Parameters
    ///
    /// - `S`: State type
    /// - `A`: Action type
    /// - `E`: Environment type
    /// - `R`: Reducer implementation
    pub struct Store<S, A, E, R>
    where
        R: Reducer<State = S, Action = A, Environment = E>,
    {
        state: S,
        reducer: R,
        environment: E,
        config: StoreConfig,
        observers: Vec<Observer<S>>,
    }

    impl<S, A, E, R> Store<S, A, E, R>
    where
        R: Reducer<State = S, Action = A, Environment = E>,
    {
        /// Create a new store with initial state, reducer, and environment
        ///
        /// Uses [`StoreConfig::default`].
        #[must_use]
        pub fn new(initial_state: S, reducer: R, environment: E) -> Self {
            Self::with_config(initial_state, reducer, environment, StoreConfig::default())
        }

        /// Create a new Store with custom configuration
        #[must_use]
        pub fn with_config(
            initial_state: S,
            reducer: R,
            environment: E,
            config: StoreConfig,
        ) -> Self {
            Self {
                state: initial_state,
                reducer,
                environment,
                config,
                observers: Vec::new(),
            }
        }

        /// Register an observer called with the state after every `send`
        ///
        /// Observers run in registration order, once per successful `send`,
        /// after all follow-up actions have been reduced.
        pub fn subscribe<F>(&mut self, observer: F)
        where
            F: FnMut(&S) + 'static,
        {
            self.observers.push(Box::new(observer));
        }

        /// Send an action to the store
        ///
        /// 1. Calls reducer with (state, action, environment)
        /// 2. Executes returned effects in order
        /// 3. Reduces any actions the effects fed back, oldest first
        /// 4. Notifies observers
        ///
        /// # Errors
        ///
        /// Returns [`StoreError::FeedbackLimitExceeded`] if effects produced more
        /// follow-up actions than [`StoreConfig::max_feedback_actions`]. Observers
        /// are not notified in that case.
        #[tracing::instrument(skip(self, action), name = "store_send")]
        pub fn send(&mut self, action: A) -> Result<(), StoreError> {
            let mut queue = VecDeque::from([action]);
            let mut follow_ups = 0_usize;
            let mut first = true;

            while let Some(action) = queue.pop_front() {
                if first {
                    first = false;
                } else {
                    follow_ups += 1;
                    if follow_ups > self.config.max_feedback_actions {
                        tracing::warn!(
                            limit = self.config.max_feedback_actions,
                            dropped = queue.len() + 1,
                            "Effect feedback limit exceeded"
                        );
                        return Err(StoreError::FeedbackLimitExceeded {
                            limit: self.config.max_feedback_actions,
                        });
                    }
                }

                let effects = {
                    let span = tracing::debug_span!("reducer_execution");
                    let _enter = span.enter();
                    self.reducer
                        .reduce(&mut self.state, action, &self.environment)
                };

                tracing::trace!("Reducer completed, returned {} effects", effects.len());
                for effect in effects {
                    Self::execute_effect(effect, &mut queue);
                }
            }

            tracing::debug!(follow_ups, "Action processing completed");

            for observer in &mut self.observers {
                observer(&self.state);
            }

            Ok(())
        }

        /// Read current state via a closure
        ///
        /// ```ignore
        /// let todo_count = store.state(|s| s.todos.len());
        /// ```
        pub fn state<F, T>(&self, f: F) -> T
        where
            F: FnOnce(&S) -> T,
        {
            f(&self.state)
        }

        /// Access the injected environment
        #[must_use]
        pub const fn environment(&self) -> &E {
            &self.environment
        }

        fn execute_effect(effect: Effect<A>, queue: &mut VecDeque<A>) {
            match effect {
                Effect::None => {
                    tracing::trace!("Executing Effect::None (no-op)");
                },
                Effect::Parallel(effects) | Effect::Sequential(effects) => {
                    tracing::trace!("Executing composite effect with {} effects", effects.len());
                    for effect in effects {
                        Self::execute_effect(effect, queue);
                    }
                },
                Effect::Send(action) => {
                    tracing::trace!("Executing Effect::Send");
                    queue.push_back(*action);
                },
                Effect::Run(run) => {
                    tracing::trace!("Executing Effect::Run");
                    if let Some(action) = run() {
                        tracing::trace!("Effect::Run produced an action, queueing it");
                        queue.push_back(action);
                    }
                },
            }
        }
    }
}

pub use store::Store;
