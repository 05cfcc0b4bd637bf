/// `|value² - target|`
pub fn square_residual(value: f64, target: f64) -> f64 {
    libm::fabs(value * value - target)
}

pub fn relative_error(value: f64, target: f64) -> f64 {
    square_residual(value, target) / libm::fabs(target)
}
