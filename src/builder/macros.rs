//! Macros for declarative DFA construction.

/// Declare a DFA as a literal table.
///
/// Expands to a [`DfaBuilder`](crate::builder::DfaBuilder) chain and
/// yields its `Result`, so malformed definitions still fail through the
/// normal error path.
///
/// # Example
///
/// ```
/// use acceptor::dfa;
///
/// let dfa = dfa! {
///     states: 2,
///     alphabet: ['a', 'b'],
///     start: 0,
///     accepting: [1],
///     transitions: {
///         (0, 'a') => 1,
///         (0, 'b') => 0,
///         (1, 'a') => 1,
///         (1, 'b') => 0,
///     },
/// }
/// .unwrap();
///
/// assert_eq!(dfa.lookup(0, 'a'), Some(1));
/// ```
#[macro_export]
macro_rules! dfa {
    (
        states: $num_states:expr,
        alphabet: [$($symbol:expr),* $(,)?],
        start: $start:expr,
        accepting: [$($accepting:expr),* $(,)?],
        transitions: {
            $(($from:expr, $on:expr) => $to:expr),* $(,)?
        } $(,)?
    ) => {{
        let alphabet: ::std::vec::Vec<char> = ::std::vec![$($symbol),*];
        let accepting: ::std::vec::Vec<$crate::core::StateId> = ::std::vec![$($accepting),*];
        $crate::builder::DfaBuilder::new()
            .states($num_states)
            .alphabet(alphabet)
            $(.transition($from, $on, $to))*
            .start($start)
            .accepting_states(accepting)
            .build()
    }};
}
