/// The evaluator module reduces tokens to a number.
///
/// The evaluator resolves parenthesised groups, checks that what remains is a
/// well-formed alternation of numbers and operators, and then reduces it in
/// two precedence passes: multiplication and division first, addition and
/// subtraction second, each left to right.
///
/// # Responsibilities
/// - Pairs and collapses parentheses, innermost first.
/// - Rejects malformed operator sequences.
/// - Reports runtime errors such as division by zero.
pub mod evaluator;
/// The lexer module tokenizes expressions for evaluation.
///
/// The lexer reads the raw expression text and produces a sequence of typed
/// tokens: numbers, the four arithmetic operators, and parentheses. This is
/// the first stage of evaluation.
///
/// # Responsibilities
/// - Converts the input character stream into tokens in document order.
/// - Decides whether a `+` or `-` is an operator or the sign of a number.
/// - Reports lexical errors for unknown characters and malformed numbers.
pub mod lexer;
