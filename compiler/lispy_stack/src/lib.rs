//! Stack growth guard for deeply nested expressions.
//!
//! Parsing, reading, evaluating and printing all recurse once per level of
//! list nesting, so an input like `((((...))))` with a hundred thousand
//! levels would overflow a fixed-size thread stack. Every recursive step in
//! the workspace goes through [`ensure_sufficient_stack`].
//!
//! - **Native targets**: `stacker` switches to a freshly allocated segment
//!   when less than [`RED_ZONE`] bytes remain.
//! - **WASM targets**: passthrough.

/// Remaining stack below which a new segment is allocated (100KB).
pub const RED_ZONE: usize = 100 * 1024;

/// Size of each newly allocated stack segment (1MB).
pub const STACK_PER_RECURSION: usize = 1024 * 1024;

/// Run `f`, growing the stack first if the red zone has been reached.
///
/// ```text
/// fn read(node: &AstNode) -> Value {
///     ensure_sufficient_stack(|| {
///         // ... recurse into node.children ...
///     })
/// }
/// ```
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, STACK_PER_RECURSION, f)
}

/// WASM version - calls `f` directly.
#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}

#[cfg(test)]
mod tests;
