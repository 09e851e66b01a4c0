use std::error::Error;
use std::fmt;

pub type SearchResult<T> = Result<T, SearchError>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    /// Every reachable node was expanded without meeting the goal.
    Exhausted { depth: usize, visited: usize },
    /// The configured depth limit was hit before the goal was found.
    DepthLimitReached { max_depth: usize },
    /// A visited node has no recorded parent during path reconstruction.
    BrokenParentChain { key: u64 },
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SearchError::Exhausted { depth, visited } => write!(
                f,
                "state space exhausted at depth {depth} after visiting {visited} nodes without reaching the goal"
            ),
            SearchError::DepthLimitReached { max_depth } => {
                write!(f, "goal not reached within {max_depth} plies")
            }
            SearchError::BrokenParentChain { key } => {
                write!(f, "no parent recorded for visited node {key:#x}")
            }
        }
    }
}

impl Error for SearchError {}
