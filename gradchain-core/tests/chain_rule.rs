use approx::assert_abs_diff_eq;
use gradchain_core::autograd::{numerical_diff, check_grad, GradCheckConfig};
use gradchain_core::creation::{from_vec, rand_uniform_with};
use gradchain_core::{exp, square, GradChainError, Variable};
use rand::rngs::StdRng;
use rand::SeedableRng;

mod common;
use common::{composite, composite_derivative, init_logging};

#[test]
fn test_chain_rule_matches_closed_form() -> Result<(), GradChainError> {
    init_logging();
    let x = Variable::new(0.5f64);
    let y = composite(&x)?;
    y.backward()?;

    let grad = x.grad().expect("x should have a gradient");
    assert_abs_diff_eq!(grad, composite_derivative(0.5), epsilon = 1e-4);
    assert_abs_diff_eq!(grad, 3.297442541400256, epsilon = 1e-4);
    Ok(())
}

#[test]
fn test_chain_rule_matches_numerical_diff() -> Result<(), GradChainError> {
    init_logging();
    let x = Variable::new(0.5f64);
    let y = composite(&x)?;
    y.backward()?;

    let numerical = numerical_diff(composite, &x, 1e-4)?;
    assert_abs_diff_eq!(x.grad().unwrap(), numerical, epsilon = 1e-4);
    Ok(())
}

#[test]
fn test_step_by_step_matches_nested_calls() -> Result<(), GradChainError> {
    let x1 = Variable::new(0.5f64);
    let a = square(&x1)?;
    let b = exp(&a)?;
    let y1 = square(&b)?;
    y1.backward()?;

    let x2 = Variable::new(0.5f64);
    let y2 = square(&exp(&square(&x2)?)?)?;
    y2.backward()?;

    assert_eq!(y1.data(), y2.data());
    assert_eq!(x1.grad(), x2.grad());
    Ok(())
}

#[test]
fn test_chain_rule_on_arrays() -> Result<(), GradChainError> {
    init_logging();
    let points = vec![-1.0f64, -0.25, 0.0, 0.5, 1.0, 1.25];
    let x = Variable::new(from_vec(points.clone(), &[2, 3])?);
    let y = composite(&x)?;
    y.backward()?;

    let grad = x.grad().unwrap();
    assert_eq!(grad.shape(), &[2, 3]);
    for (g, p) in grad.iter().zip(points) {
        assert_abs_diff_eq!(*g, composite_derivative(p), epsilon = 1e-9);
    }
    Ok(())
}

#[test]
fn test_gradient_check_over_random_inputs() {
    init_logging();
    let mut rng = StdRng::seed_from_u64(2024);
    for _ in 0..10 {
        let x = rand_uniform_with(&mut rng, &[4], -0.8f64, 0.8).unwrap();
        assert_eq!(check_grad(composite, &x, GradCheckConfig::default()), Ok(()));
    }
}

#[test]
fn test_each_ancestor_receives_single_consumer_gradient() -> Result<(), GradChainError> {
    let x = Variable::new(0.5f64);
    let a = square(&x)?;
    let b = exp(&a)?;
    let y = square(&b)?;
    y.backward()?;

    // Every gradient equals exactly what its consumer's backward rule returns for the
    // gradient one step downstream; nothing is summed in.
    let gy = y.grad().unwrap();
    let gb = y.creator().unwrap().backward(&gy)?;
    let ga = b.creator().unwrap().backward(&gb)?;
    let gx = a.creator().unwrap().backward(&ga)?;
    assert_eq!(b.grad(), Some(gb));
    assert_eq!(a.grad(), Some(ga));
    assert_eq!(x.grad(), Some(gx));
    Ok(())
}
