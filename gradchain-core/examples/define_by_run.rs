//! Shows the graph that forward code leaves behind, then replays it backward by hand
//! before letting `backward()` do the same walk.

use gradchain_core::{Exp, Function, GradChainError, Square, Variable};

fn main() -> Result<(), GradChainError> {
    env_logger::init();

    let (f_a, f_b, f_c) = (Function::new(Square), Function::new(Exp), Function::new(Square));
    let x = Variable::new(0.5f64);
    let a = f_a.call(&x)?;
    let b = f_b.call(&a)?;
    let y = f_c.call(&b)?;

    println!("Following creator links from y:");
    let mut node = y.clone();
    while let Some(func) = node.creator() {
        println!("  {:?} <- {}", node, func.name());
        node = match func.input() {
            Some(input) => input,
            None => break,
        };
    }
    println!("  {:?} (root)", node);

    // One edge at a time: take the creator, take its input, call its backward rule.
    y.set_grad(1.0)?;
    b.set_grad(f_c.backward(&1.0)?)?;
    a.set_grad(f_b.backward(&b.grad().unwrap_or_default())?)?;
    x.set_grad(f_a.backward(&a.grad().unwrap_or_default())?)?;
    println!("\nby hand:     x.grad = {:?}", x.grad());

    x.clear_grad();
    y.backward()?;
    println!("backward():  x.grad = {:?}", x.grad());
    Ok(())
}
