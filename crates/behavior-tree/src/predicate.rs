//! Typed predicates and target selectors.
//!
//! Both are pure functions of a read-only state reference, wrapped in an
//! `Arc` so trees can share them freely. Each carries a name that shows up
//! in trace output, which matters when a rotation has dozens of guards.
//!
//! Predicates compose with [`Predicate::and`], [`Predicate::or`], `!` and the
//! [`Predicate::all`] / [`Predicate::any`] helpers, so a long guard can be
//! split into named parts instead of one opaque boolean expression.

use std::borrow::Cow;
use std::fmt;
use std::ops::Not;
use std::sync::Arc;

type CheckFn<S> = dyn Fn(&S) -> bool + Send + Sync;
type SelectFn<S, T> = dyn Fn(&S) -> Option<T> + Send + Sync;

/// A named, side-effect-free boolean test over the state snapshot.
pub struct Predicate<S> {
    name: Cow<'static, str>,
    check: Arc<CheckFn<S>>,
}

impl<S> Clone for Predicate<S> {
    fn clone(&self) -> Self {
        Self {
            name: self.name.clone(),
            check: Arc::clone(&self.check),
        }
    }
}

impl<S> fmt::Debug for Predicate<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Predicate").field(&self.name).finish()
    }
}

impl<S> Predicate<S> {
    /// Creates a predicate from a name and a check function.
    pub fn new<F>(name: impl Into<Cow<'static, str>>, check: F) -> Self
    where
        F: Fn(&S) -> bool + Send + Sync + 'static,
    {
        Self {
            name: name.into(),
            check: Arc::new(check),
        }
    }

    /// Name used in diagnostics.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Evaluates the predicate against the state.
    #[inline]
    pub fn check(&self, state: &S) -> bool {
        (self.check)(state)
    }
}

impl<S: 'static> Predicate<S> {
    /// A predicate that always holds.
    pub fn always() -> Self {
        Self::new("always", |_| true)
    }

    /// A predicate that never holds.
    pub fn never() -> Self {
        Self::new("never", |_| false)
    }

    /// Short-circuiting conjunction: `other` is only evaluated if `self` holds.
    pub fn and(self, other: Predicate<S>) -> Self {
        let name = format!("({} && {})", self.name, other.name);
        Self::new(name, move |state| self.check(state) && other.check(state))
    }

    /// Short-circuiting disjunction: `other` is only evaluated if `self` fails.
    pub fn or(self, other: Predicate<S>) -> Self {
        let name = format!("({} || {})", self.name, other.name);
        Self::new(name, move |state| self.check(state) || other.check(state))
    }

    /// Holds when every predicate holds, evaluated left to right.
    ///
    /// An empty list holds vacuously.
    pub fn all(predicates: Vec<Predicate<S>>) -> Self {
        let name = join_names(&predicates, " && ");
        Self::new(name, move |state| predicates.iter().all(|p| p.check(state)))
    }

    /// Holds when any predicate holds, evaluated left to right.
    ///
    /// An empty list never holds.
    pub fn any(predicates: Vec<Predicate<S>>) -> Self {
        let name = join_names(&predicates, " || ");
        Self::new(name, move |state| predicates.iter().any(|p| p.check(state)))
    }
}

impl<S: 'static> Not for Predicate<S> {
    type Output = Predicate<S>;

    fn not(self) -> Self::Output {
        let name = format!("!{}", self.name);
        Predicate::new(name, move |state| !self.check(state))
    }
}

fn join_names<S>(predicates: &[Predicate<S>], sep: &str) -> String {
    let names: Vec<&str> = predicates.iter().map(|p| p.name()).collect();
    format!("({})", names.join(sep))
}

/// A named function resolving which entity an action should affect.
///
/// Returning `None` means "no valid target this tick"; the action using the
/// selector fails without attempting a dispatch.
pub struct TargetSelector<S, T> {
    name: Cow<'static, str>,
    select: Arc<SelectFn<S, T>>,
}

impl<S, T> Clone for TargetSelector<S, T> {
    fn clone(&self) -> Self {
        Self {
            name: self.name.clone(),
            select: Arc::clone(&self.select),
        }
    }
}

impl<S, T> fmt::Debug for TargetSelector<S, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("TargetSelector").field(&self.name).finish()
    }
}

impl<S, T> TargetSelector<S, T> {
    /// Creates a selector from a name and a resolve function.
    pub fn new<F>(name: impl Into<Cow<'static, str>>, select: F) -> Self
    where
        F: Fn(&S) -> Option<T> + Send + Sync + 'static,
    {
        Self {
            name: name.into(),
            select: Arc::new(select),
        }
    }

    /// Always resolves to the same target.
    pub fn fixed(target: T) -> Self
    where
        T: Copy + Send + Sync + 'static,
    {
        Self::new("fixed", move |_| Some(target))
    }

    /// Name used in diagnostics.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Resolves the target against the state.
    #[inline]
    pub fn select(&self, state: &S) -> Option<T> {
        (self.select)(state)
    }
}
