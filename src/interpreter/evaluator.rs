/// Core evaluation logic.
///
/// Contains the public entry points `evaluate` and `reduce`, which run the
/// parenthesis pass, structural validation, and the two precedence passes in
/// order.
pub mod core;

/// Parenthesis resolution.
///
/// Collapses every parenthesised group, innermost first, into a single number
/// token until no parentheses remain.
pub mod group;

/// Binary operator evaluation.
///
/// Applies arithmetic operators to pairs of numbers and implements the
/// multiplicative and additive reduction passes over a [`Chain`].
///
/// [`Chain`]: crate::ast::Chain
pub mod binary;
