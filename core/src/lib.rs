//! # Tasklane Core
//!
//! Core traits and types for Tasklane features.
//!
//! Every feature is a reducer over an owned piece of state. The reducer
//! decides what changes; the store runtime (in `tasklane-runtime`) decides
//! when effects run.
//!
//! ## Core Concepts
//!
//! - **State**: Domain state for a feature
//! - **Action**: All possible inputs to a reducer (commands and events)
//! - **Reducer**: Pure function `(State, Action, Environment) → (State, Effects)`
//! - **Effect**: Side effect descriptions (not execution)
//! - **Environment**: Injected dependencies via traits
//!
//! ## Example
//!
//! ```
//! use tasklane_core::{effect::Effect, reducer::Reducer, smallvec, SmallVec};
//!
//! #[derive(Clone, Debug, Default)]
//! struct CounterState {
//!     count: i64,
//! }
//!
//! #[derive(Clone, Debug)]
//! enum CounterAction {
//!     Increment,
//! }
//!
//! struct CounterReducer;
//!
//! impl Reducer for CounterReducer {
//!     type State = CounterState;
//!     type Action = CounterAction;
//!     type Environment = ();
//!
//!     fn reduce(
//!         &self,
//!         state: &mut CounterState,
//!         action: CounterAction,
//!         _env: &(),
//!     ) -> SmallVec<[Effect<CounterAction>; 4]> {
//!         match action {
//!             CounterAction::Increment => state.count += 1,
//!         }
//!         smallvec![Effect::None]
//!     }
//! }
//!
//! let mut state = CounterState::default();
//! let effects = CounterReducer.reduce(&mut state, CounterAction::Increment, &());
//! assert_eq!(state.count, 1);
//! assert!(effects.iter().all(Effect::is_none));
//! ```

// Re-export commonly used types
pub use smallvec::{smallvec, SmallVec};

/// Reducer module - The core trait for business logic
///
/// Reducers are pure functions: `(State, Action, Environment) → (State, Effects)`
///
/// They contain all business logic and are deterministic and testable.
pub mod reducer {
    use super::effect::Effect;
    use smallvec::SmallVec;

    /// The Reducer trait - core abstraction for business logic
    ///
    /// # Type Parameters
    ///
    /// - `State`: The domain state this reducer operates on
    /// - `Action`: The action type this reducer processes
    /// - `Environment`: The injected dependencies this reducer needs
    pub trait Reducer {
        /// The state type this reducer operates on
        type State;

        /// The action type this reducer processes
        type Action;

        /// The environment type with injected dependencies
        type Environment;

        /// Reduce an action into state changes and effects
        ///
        /// This is a pure function that:
        /// 1. Validates the action
        /// 2. Updates state in place
        /// 3. Returns effect descriptions to be executed
        ///
        /// Most actions produce zero or one effect, so the returned buffer
        /// stays on the stack.
        fn reduce(
            &self,
            state: &mut Self::State,
            action: Self::Action,
            env: &Self::Environment,
        ) -> SmallVec<[Effect<Self::Action>; 4]>;
    }
}

/// Effect module - Side effect descriptions
///
/// Effects describe side effects to be performed by the runtime.
/// They are values (not execution) and are composable.
pub mod effect {
    /// Boxed synchronous side effect.
    ///
    /// Returns `Option<Action>` - if `Some`, the action is fed back into the reducer.
    pub type RunFn<Action> = Box<dyn FnOnce() -> Option<Action>>;

    /// Effect type - describes a side effect to be executed
    ///
    /// Effects are NOT executed immediately. They are descriptions of what should happen,
    /// returned from reducers and executed by the Store runtime.
    pub enum Effect<Action> {
        /// No-op effect
        None,

        /// Effects with no ordering requirement between them
        Parallel(Vec<Effect<Action>>),

        /// Effects that must run in order
        Sequential(Vec<Effect<Action>>),

        /// Feed an action back into the reducer
        Send(Box<Action>),

        /// Arbitrary synchronous computation, usually a call into the environment
        Run(RunFn<Action>),
    }

    // Manual Debug implementation since closures don't implement Debug
    impl<Action> std::fmt::Debug for Effect<Action>
    where
        Action: std::fmt::Debug,
    {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            match self {
                Effect::None => write!(f, "Effect::None"),
                Effect::Parallel(effects) => {
                    f.debug_tuple("Effect::Parallel").field(effects).finish()
                },
                Effect::Sequential(effects) => {
                    f.debug_tuple("Effect::Sequential").field(effects).finish()
                },
                Effect::Send(action) => f.debug_tuple("Effect::Send").field(action).finish(),
                Effect::Run(_) => write!(f, "Effect::Run(<fn>)"),
            }
        }
    }

    impl<Action> Effect<Action> {
        /// Combine effects with no ordering requirement
        #[must_use]
        pub const fn merge(effects: Vec<Effect<Action>>) -> Effect<Action> {
            Effect::Parallel(effects)
        }

        /// Chain effects to run sequentially
        #[must_use]
        pub const fn chain(effects: Vec<Effect<Action>>) -> Effect<Action> {
            Effect::Sequential(effects)
        }

        /// Feed `action` back into the store once the current action is reduced
        #[must_use]
        pub fn send(action: Action) -> Effect<Action> {
            Effect::Send(Box::new(action))
        }

        /// Wrap a fire-and-forget computation that produces no follow-up action
        #[must_use]
        pub fn fire_and_forget<F>(f: F) -> Effect<Action>
        where
            F: FnOnce() + 'static,
        {
            Effect::Run(Box::new(move || {
                f();
                None
            }))
        }

        /// Returns true if this effect does nothing when executed
        #[must_use]
        pub fn is_none(&self) -> bool {
            match self {
                Effect::None => true,
                Effect::Parallel(effects) | Effect::Sequential(effects) => {
                    effects.iter().all(Effect::is_none)
                },
                Effect::Send(_) | Effect::Run(_) => false,
            }
        }
    }
}

/// Environment module - Dependency injection traits
///
/// All external dependencies are abstracted behind traits and injected
/// via the Environment parameter.
pub mod environment {
    use chrono::{DateTime, Utc};

    /// Clock trait - abstracts time operations for testability
    pub trait Clock {
        /// Get the current time
        fn now(&self) -> DateTime<Utc>;
    }

    /// Production clock backed by the system time
    #[derive(Debug, Clone, Copy, Default)]
    pub struct SystemClock;

    impl Clock for SystemClock {
        fn now(&self) -> DateTime<Utc> {
            Utc::now()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::effect::Effect;
    use super::environment::{Clock, SystemClock};

    #[test]
    fn nested_none_effects_are_none() {
        let effect: Effect<()> = Effect::merge(vec![
            Effect::None,
            Effect::chain(vec![Effect::None, Effect::None]),
        ]);
        assert!(effect.is_none());
    }

    #[test]
    fn send_and_run_effects_are_not_none() {
        assert!(!Effect::send(1_u8).is_none());
        assert!(!Effect::<u8>::fire_and_forget(|| {}).is_none());
        assert!(!Effect::chain(vec![Effect::None, Effect::send(1_u8)]).is_none());
    }

    #[test]
    fn debug_hides_closures() {
        let effect = Effect::<u8>::fire_and_forget(|| {});
        assert_eq!(format!("{effect:?}"), "Effect::Run(<fn>)");
        assert_eq!(format!("{:?}", Effect::send(3_u8)), "Effect::Send(3)");
    }

    #[test]
    fn system_clock_moves_forward() {
        let clock = SystemClock;
        let first = clock.now();
        let second = clock.now();
        assert!(second >= first);
    }
}
