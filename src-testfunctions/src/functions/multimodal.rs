//! Multimodal test functions
//!
//! These functions have multiple local minima and are used to test the global
//! search capabilities of the optimizer. Functions whose coefficients depend
//! on the dimension (Griewank, Hartman) come as one typed coefficient set per
//! variant.

use ndarray::Array1;

/// Goldstein-Price function - 2D, several deep local minima
/// Global minimum: f(x) = 3 at x = (0, -1)
/// Bounds: x_i in [-2, 2]
pub fn goldstein_price(x: &Array1<f64>) -> f64 {
    let x1 = x[0];
    let x2 = x[1];
    let u1 = (x1 + x2 + 1.0).powi(2);
    let u2 = 19.0 - 14.0 * x1 + 3.0 * x1 * x1 - 14.0 * x2 + 6.0 * x1 * x2 + 3.0 * x2 * x2;
    let u3 = (2.0 * x1 - 3.0 * x2).powi(2);
    let u4 = 18.0 - 32.0 * x1 + 12.0 * x1 * x1 + 48.0 * x2 - 36.0 * x1 * x2 + 27.0 * x2 * x2;
    (1.0 + u1 * u2) * (30.0 + u3 * u4)
}

/// Six-hump camelback function - 2D, two global minima
/// Global minimum: f(x) = -1.031628453489877 at (0.08983, -0.7126) and (-0.08983, 0.7126)
/// Bounds: x1 in [-5, 5], x2 in [-2, 2]
pub fn six_hump_camelback(x: &Array1<f64>) -> f64 {
    let x1 = x[0];
    let x2 = x[1];
    (4.0 - 2.1 * x1.powi(2) + x1.powi(4) / 3.0) * x1.powi(2)
        + x1 * x2
        + (-4.0 + 4.0 * x2.powi(2)) * x2.powi(2)
}

/// Rastrigin function, cosine variant used by the SCE-UA reference problems
/// f(x) = sum(x_i^2 - cos(18 x_i))
/// Global minimum: f(x) = -2 at x = (0, 0)
/// Bounds: x_i in [-1, 1]
pub fn rastrigin(x: &Array1<f64>) -> f64 {
    x.iter().map(|&xi| xi * xi - (18.0 * xi).cos()).sum()
}

/// Scaling of the quadratic term of the Griewank function
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GriewankScale {
    /// Divisor applied to the sum of squares
    pub divisor: f64,
}

/// Griewank scale for the 2D problem
pub const GRIEWANK_2D: GriewankScale = GriewankScale { divisor: 200.0 };

/// Griewank scale for the N-dimensional (typically 10D) problem
pub const GRIEWANK_ND: GriewankScale = GriewankScale { divisor: 4000.0 };

/// Griewank function with an explicit scale
pub fn griewank_with(x: &Array1<f64>, scale: &GriewankScale) -> f64 {
    let sum_squares: f64 = x.iter().map(|&xi| xi * xi / scale.divisor).sum();
    let product_cos: f64 = x
        .iter()
        .enumerate()
        .map(|(i, &xi)| (xi / ((i + 1) as f64).sqrt()).cos())
        .product();
    sum_squares - product_cos + 1.0
}

/// Griewank function, 2D variant
/// Global minimum: f(x) = 0 at x = (0, 0)
/// Bounds: x_i in [-600, 600]
pub fn griewank_2d(x: &Array1<f64>) -> f64 {
    griewank_with(x, &GRIEWANK_2D)
}

/// Griewank function, N-dimensional variant
/// Global minimum: f(x) = 0 at x = (0, ..., 0)
/// Bounds: x_i in [-600, 600]
pub fn griewank(x: &Array1<f64>) -> f64 {
    griewank_with(x, &GRIEWANK_ND)
}

/// Shekel centers, one row per term (m = 10, n = 4)
const SHEKEL_A: [[f64; 4]; 10] = [
    [4.0, 4.0, 4.0, 4.0],
    [1.0, 1.0, 1.0, 1.0],
    [8.0, 8.0, 8.0, 8.0],
    [6.0, 6.0, 6.0, 6.0],
    [3.0, 7.0, 3.0, 7.0],
    [2.0, 9.0, 2.0, 9.0],
    [5.0, 5.0, 3.0, 3.0],
    [8.0, 1.0, 8.0, 1.0],
    [6.0, 2.0, 6.0, 2.0],
    [7.0, 3.6, 7.0, 3.6],
];

const SHEKEL_C: [f64; 10] = [0.1, 0.2, 0.2, 0.4, 0.4, 0.6, 0.3, 0.7, 0.5, 0.5];

/// Shekel function (m = 10) - 4D, ten sharp wells
/// Global minimum: f(x) = -10.5364098252 at x = (4, 4, 4, 4)
/// Bounds: x_i in [0, 10]
pub fn shekel(x: &Array1<f64>) -> f64 {
    SHEKEL_A
        .iter()
        .zip(SHEKEL_C.iter())
        .map(|(a, &c)| {
            let u: f64 = x.iter().zip(a.iter()).map(|(&xj, &aj)| (xj - aj).powi(2)).sum();
            -1.0 / (u + c)
        })
        .sum()
}

/// Coefficients of a Hartman function in `D` dimensions (4 terms)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HartmanCoefficients<const D: usize> {
    /// Curvature of each term, one row per term
    pub a: [[f64; D]; 4],
    /// Weight of each term
    pub c: [f64; 4],
    /// Center of each term, one row per term
    pub p: [[f64; D]; 4],
}

/// Hartman 3D coefficients
pub const HARTMAN_3D: HartmanCoefficients<3> = HartmanCoefficients {
    a: [
        [3.0, 10.0, 30.0],
        [0.1, 10.0, 35.0],
        [3.0, 10.0, 30.0],
        [0.1, 10.0, 35.0],
    ],
    c: [1.0, 1.2, 3.0, 3.2],
    p: [
        [0.3689, 0.1170, 0.2673],
        [0.4699, 0.4387, 0.7470],
        [0.1091, 0.8732, 0.5547],
        [0.03815, 0.5743, 0.8828],
    ],
};

/// Hartman 6D coefficients
pub const HARTMAN_6D: HartmanCoefficients<6> = HartmanCoefficients {
    a: [
        [10.0, 3.0, 17.0, 3.5, 1.7, 8.0],
        [0.05, 10.0, 17.0, 0.1, 8.0, 14.0],
        [3.0, 3.5, 1.7, 10.0, 17.0, 8.0],
        [17.0, 8.0, 0.05, 10.0, 0.1, 14.0],
    ],
    c: [1.0, 1.2, 3.0, 3.2],
    p: [
        [0.1312, 0.1696, 0.5569, 0.0124, 0.8283, 0.5886],
        [0.2329, 0.4135, 0.8307, 0.3736, 0.1004, 0.9991],
        [0.2348, 0.1451, 0.3522, 0.2883, 0.3047, 0.6650],
        [0.4047, 0.8828, 0.8732, 0.5743, 0.1091, 0.0381],
    ],
};

/// Hartman function for an explicit coefficient set
pub fn hartman_with<const D: usize>(x: &Array1<f64>, coeffs: &HartmanCoefficients<D>) -> f64 {
    (0..4)
        .map(|i| {
            let u: f64 = (0..D).map(|j| coeffs.a[i][j] * (x[j] - coeffs.p[i][j]).powi(2)).sum();
            -coeffs.c[i] * (-u).exp()
        })
        .sum()
}

/// Hartman 3D function
/// Global minimum: f(x) = -3.86278 at x = (0.114614, 0.555649, 0.852547)
/// Bounds: x_i in [0, 1]
pub fn hartman_3d(x: &Array1<f64>) -> f64 {
    hartman_with(x, &HARTMAN_3D)
}

/// Hartman 6D function
/// Global minimum: f(x) = -3.322368011415515 at
/// x = (0.201690, 0.150011, 0.476874, 0.275332, 0.311652, 0.657300)
/// Bounds: x_i in [0, 1]
pub fn hartman_6d(x: &Array1<f64>) -> f64 {
    hartman_with(x, &HARTMAN_6D)
}

/// Hosaki function - 2D, one local and one global minimum
/// Global minimum: f(x) = -2.3458 at x = (4, 2)
/// Bounds: x1 in [0, 5], x2 in [0, 6]
pub fn hosaki(x: &Array1<f64>) -> f64 {
    let x1 = x[0];
    let x2 = x[1];
    (1.0 - 8.0 * x1 + 7.0 * x1.powi(2) - 7.0 * x1.powi(3) / 3.0 + x1.powi(4) / 4.0)
        * x2.powi(2)
        * (-x2).exp()
}
