/*!
Callbacks associated with a context.

# Callback types

Callbacks may be mutable functions.
Still, information passed from a refutation is owned by the callback and never returned to the refutation.
*/

use super::Context;
use crate::dispatch::Dispatch;

pub type CallbackOnDispatch = dyn FnMut(Dispatch);

impl Context {
    /// Sets a callback to receive each [dispatch](crate::dispatch) from a refutation.
    pub fn set_callback_dispatch(&mut self, callback: Box<CallbackOnDispatch>) {
        self.callback_dispatch = Some(callback);
    }

    /// Removes the dispatch callback, if one was set.
    pub fn clear_callback_dispatch(&mut self) {
        self.callback_dispatch = None;
    }
}
