use crate::autograd::Function;
use crate::error::GradChainError;
use crate::payload::Payload;
use crate::variable::Variable;
use log::{debug, trace};

/// Walks creator links from `root` back to the graph's roots, writing each input's gradient.
///
/// Uses an explicit LIFO worklist instead of recursion so stack depth does not grow with the
/// length of the chain. Each node in a chain has exactly one consuming operation, so the
/// gradient written to an input overwrites whatever was there instead of being summed.
pub(crate) fn backward<P: Payload>(root: &Variable<P>) -> Result<(), GradChainError> {
    let first = match root.creator() {
        Some(func) => func,
        None => {
            debug!("backward() called on a root variable. No operation to perform.");
            return Ok(());
        }
    };

    let seeded = root.grad().is_none();
    if seeded {
        let seed = root.read_data().data.ones_like();
        debug!("Seeding terminal gradient with ones of shape {:?}", seed.shape());
        root.write_data().grad = Some(seed);
    }

    let result = propagate(first);
    if result.is_err() && seeded {
        // A failed pass must not leave a seed the caller never set.
        root.clear_grad();
    }
    result
}

fn propagate<P: Payload>(first: Function<P>) -> Result<(), GradChainError> {
    let mut funcs: Vec<Function<P>> = vec![first];
    while let Some(func) = funcs.pop() {
        let (x, y) = endpoints(&func)?;

        let gy = y.grad().ok_or_else(|| {
            GradChainError::InternalError(format!(
                "output of '{}' reached without a gradient",
                func.name()
            ))
        })?;
        let gx = func.backward(&gy)?;

        let (expected, actual) = (x.shape(), gx.shape());
        if expected != actual {
            return Err(GradChainError::shape_mismatch(
                &expected,
                &actual,
                &format!("{}::backward", func.name()),
            ));
        }
        trace!("{}: propagated gradient {:?}", func.name(), gx);
        x.write_data().grad = Some(gx);

        if let Some(creator) = x.creator() {
            funcs.push(creator);
        }
    }
    Ok(())
}

fn endpoints<P: Payload>(func: &Function<P>) -> Result<(Variable<P>, Variable<P>), GradChainError> {
    let input = func.input().ok_or_else(|| {
        GradChainError::InvalidState(format!("'{}' has no recorded input", func.name()))
    })?;
    let output = func.output().ok_or_else(|| {
        GradChainError::InvalidState(format!("output of '{}' has been dropped", func.name()))
    })?;
    Ok((input, output))
}

#[cfg(test)]
#[path = "graph_test.rs"]
mod tests;
