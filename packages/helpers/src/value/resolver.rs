//! Computed config slots: resolver functions and in-flight values

use super::{Record, Shared, Value};
use futures::future::{BoxFuture, FutureExt, Shared as SharedFuture};
use saslmech_common::Result;
use std::fmt;
use std::future::Future;
use std::sync::Arc;

type ResolverFn = dyn Fn(&Shared<Record>, &[Value]) -> Result<Value> + Send + Sync;

/// Function stored in a config slot
///
/// It receives the record it was looked up in, followed by any extra
/// arguments the caller supplied. Returning `Err` is the equivalent of
/// throwing; returning [`Value::Deferred`] hands back a value that settles
/// later.
#[derive(Clone)]
pub struct Resolver {
    func: Arc<ResolverFn>,
}

impl Resolver {
    /// Wrap a closure as a resolver
    pub fn new<F>(func: F) -> Self
    where
        F: Fn(&Shared<Record>, &[Value]) -> Result<Value> + Send + Sync + 'static,
    {
        Self {
            func: Arc::new(func),
        }
    }

    /// Invoke the resolver against `config`
    ///
    /// # Errors
    ///
    /// Returns whatever error the wrapped function produced.
    pub fn call(&self, config: &Shared<Record>, args: &[Value]) -> Result<Value> {
        (self.func)(config, args)
    }

    /// Whether both resolvers are the same function object
    #[must_use]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.func, &other.func)
    }
}

impl fmt::Debug for Resolver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[Resolver]")
    }
}

/// Value that settles asynchronously
///
/// Cloning shares the underlying computation; every clone observes the same
/// settlement.
#[derive(Clone)]
pub struct Deferred {
    future: SharedFuture<BoxFuture<'static, Result<Value>>>,
}

impl Deferred {
    /// Wrap a future as a deferred value
    pub fn new<F>(future: F) -> Self
    where
        F: Future<Output = Result<Value>> + Send + 'static,
    {
        Self {
            future: future.boxed().shared(),
        }
    }

    /// Whether both handles share one computation
    #[must_use]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        self.future.ptr_eq(&other.future)
    }

    /// Settled result, if the computation has already finished
    #[must_use]
    pub fn peek(&self) -> Option<Result<Value>> {
        self.future.peek().cloned()
    }

    pub(crate) fn into_shared(self) -> SharedFuture<BoxFuture<'static, Result<Value>>> {
        self.future
    }
}

impl fmt::Debug for Deferred {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[Deferred]")
    }
}
