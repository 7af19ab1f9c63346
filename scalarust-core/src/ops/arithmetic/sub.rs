use crate::error::AutogradError;
use crate::graph::{Graph, NodeId, Operand};

impl Graph {
    /// Subtracts two operands, built as `a + (-b)`.
    ///
    /// A scalar on the left works as the reflected form: `graph.sub(2.0, x)` is `2 - x`.
    pub fn sub(
        &mut self,
        a: impl Into<Operand>,
        b: impl Into<Operand>,
    ) -> Result<NodeId, AutogradError> {
        let (a, b) = (a.into(), b.into());
        self.atomic(|g| {
            let a = g.resolve("sub", a)?;
            let neg_b = g.neg(b)?;
            g.add(a, neg_b)
        })
    }
}

#[cfg(test)]
#[path = "sub_test.rs"]
mod tests;
