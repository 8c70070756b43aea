#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    None,
    /// Hand the current query to the search worker.
    ExecuteSearch,
    /// Issue one fetch per distinct hash for the results view.
    StartHydration,
    /// Drop the current hydration round; in-flight fetches become stale.
    CancelHydration,
}
