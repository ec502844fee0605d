//! 3D vector math for atom coordinates.

pub type Vec3 = [f64; 3];

pub fn degrees_to_radians(degrees: f64) -> f64 {
    degrees.to_radians()
}

pub fn radians_to_degrees(radians: f64) -> f64 {
    radians.to_degrees()
}

pub fn cross_product(a: Vec3, b: Vec3) -> Vec3 {
    [
        a[1] * b[2] - a[2] * b[1],
        a[2] * b[0] - a[0] * b[2],
        a[0] * b[1] - a[1] * b[0],
    ]
}

pub fn dot_product(a: Vec3, b: Vec3) -> f64 {
    a.iter().zip(b.iter()).map(|(x, y)| x * y).sum()
}

/// Euclidean length of a vector of any dimension.
pub fn norm_vector(values: &[f64]) -> f64 {
    values.iter().map(|v| v * v).sum::<f64>().sqrt()
}

fn sub(a: Vec3, b: Vec3) -> Vec3 {
    [a[0] - b[0], a[1] - b[1], a[2] - b[2]]
}

fn scale(v: Vec3, factor: f64) -> Vec3 {
    [v[0] * factor, v[1] * factor, v[2] * factor]
}

/// Dihedral (torsion) angle in degrees, in `(-180, 180]`, between the planes
/// `a-b-c` and `b-c-d`.
///
/// `None` when `b` and `c` coincide, since the central bond then has no
/// direction to rotate around.
pub fn dihedral_angle(a: Vec3, b: Vec3, c: Vec3, d: Vec3) -> Option<f64> {
    let b0 = sub(a, b);
    let b1 = sub(c, b);
    let b2 = sub(d, c);

    let b1_norm = norm_vector(&b1);
    if b1_norm == 0.0 {
        return None;
    }
    let b1 = scale(b1, 1.0 / b1_norm);

    // Project b0 and b2 onto the plane perpendicular to b1.
    let v = sub(b0, scale(b1, dot_product(b0, b1)));
    let w = sub(b2, scale(b1, dot_product(b2, b1)));

    let x = dot_product(v, w);
    let y = dot_product(cross_product(b1, v), w);

    Some(radians_to_degrees(y.atan2(x)))
}
