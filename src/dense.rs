pub fn dot(x: &[f64], y: &[f64]) -> f64 {
    x.iter().zip(y.iter()).fold(0.0, |acc, (&xk, &yk)| acc + xk * yk)
}

pub fn sq_norm(x: &[f64]) -> f64 {
    dot(x, x)
}

pub fn sq_dist(x: &[f64], y: &[f64]) -> f64 {
    x.iter()
        .zip(y.iter())
        .fold(0.0, |acc, (&xk, &yk)| acc + (xk - yk) * (xk - yk))
}
