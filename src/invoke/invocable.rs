//! The invocation trait and builder.

use crate::error::Result;
use crate::value::Value;

/// Invocable dispatches a method call by name.
pub trait Invocable {
    /// Calls `method` with `args`, failing with
    /// [`Error::MissingMethod`](crate::Error::MissingMethod) when there is no
    /// such method.
    fn invoke(&self, method: &str, args: &[Value]) -> Result<Value>;
}

/// Returns a function that calls `method` on its argument with the bound
/// `args`.
pub fn invoke<T>(method: &str, args: Vec<Value>) -> impl Fn(&T) -> Result<Value>
where
    T: Invocable + ?Sized,
{
    let method = method.to_string();
    move |target: &T| target.invoke(&method, &args)
}
