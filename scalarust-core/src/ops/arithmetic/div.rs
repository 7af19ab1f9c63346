use crate::error::AutogradError;
use crate::graph::{Graph, NodeId, Operand};

impl Graph {
    /// Divides two operands, built as `a * b ** -1`.
    ///
    /// A scalar on the left works as the reflected form: `graph.div(1.0, x)` is `1 / x`.
    /// Dividing by a zero-valued node yields ±infinity (or NaN for `0 / 0`) unless the
    /// graph checks domains.
    pub fn div(
        &mut self,
        a: impl Into<Operand>,
        b: impl Into<Operand>,
    ) -> Result<NodeId, AutogradError> {
        let (a, b) = (a.into(), b.into());
        self.atomic(|g| {
            let a = g.resolve("div", a)?;
            let inv_b = g.pow(b, -1.0)?;
            g.mul(a, inv_b)
        })
    }
}

#[cfg(test)]
#[path = "div_test.rs"]
mod tests;
