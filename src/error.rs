use std::fmt;

/// Errors produced while building a `PlanarGraph` or tracing its faces.
///
/// Both kinds abort the whole operation: no partially-built graph and no
/// partial face list is ever returned, since boundary extraction assumes a
/// complete half-edge partition.
#[derive(Debug)]
pub enum GraphError {
    /// The input cannot support a rotation system: two adjacent points
    /// coincide (zero-length edge, undefined direction), a pair is a
    /// self-loop, a pair references a point outside the graph, or a
    /// destination has an empty fan.  The caller must repair or drop the
    /// offending input upstream; retrying unchanged input never helps.
    DegenerateGeometry(String),
    /// The traversal produced an inconsistent face partition.  Signals a
    /// construction bug rather than bad input.
    InvariantViolation(String),
}

impl fmt::Display for GraphError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GraphError::DegenerateGeometry(msg) => write!(f, "degenerate geometry: {msg}"),
            GraphError::InvariantViolation(msg) => write!(f, "invariant violation: {msg}"),
        }
    }
}

impl std::error::Error for GraphError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_kind_and_message() {
        let err = GraphError::DegenerateGeometry("points 1 and 2 coincide".into());
        assert_eq!(err.to_string(), "degenerate geometry: points 1 and 2 coincide");

        let err = GraphError::InvariantViolation("walks covered 3 of 6 half-edges".into());
        assert_eq!(err.to_string(), "invariant violation: walks covered 3 of 6 half-edges");
    }
}
