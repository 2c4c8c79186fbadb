use super::vtest::VTest;

pub fn square() -> Vec<VTest> {
    vec![
        (0.0, 0.0).into(),
        (0.0, 1.0).into(),
        (1.0, 1.0).into(),
        (1.0, 0.0).into(),
    ]
}

pub fn star() -> Vec<VTest> {
    vec![
        (1.0, 0.0).into(),
        (2.0, 2.0).into(),
        (0.0, 1.0).into(),
        (-2.0, 2.0).into(),
        (-1.0, 0.0).into(),
        (-2.0, -2.0).into(),
        (0.0, -1.0).into(),
        (2.0, -2.0).into(),
    ]
}

pub fn half_frame() -> Vec<VTest> {
    vec![
        (0., 0.).into(), (0.05, 0.05).into(), (0.95, 0.05).into(), (0.95, 0.95).into(), (1., 1.).into(), (1., 0.).into()
    ]
}

/// No two vertices share a `y` coordinate
pub fn triangle() -> Vec<[f64; 2]> {
    vec![[0., 0.], [4., 1.], [1., 3.]]
}

/// A square with a notch cut into its top edge, down to a reflex vertex at (2, 1)
pub fn notched() -> Vec<[f64; 2]> {
    vec![[0., 0.], [4., 0.], [4., 4.], [2., 1.], [0., 4.]]
}

/// A sawtooth with `teeth` peaks along its top, so it has several local maxima
pub fn comb(teeth: usize) -> Vec<[f64; 2]> {
    let mut p = vec![[0., 0.], [(2 * teeth) as f64, 0.]];
    for i in (0..teeth).rev() {
        let x = (2 * i) as f64;
        p.push([x + 1.5, 3.]);
        p.push([x + 0.5, 1.]);
    }
    p
}

/// Two triangles which touch at (1, 1), given as one contour passing through that vertex twice
pub fn touching() -> Vec<[f64; 2]> {
    vec![[0., 0.], [1., 1.], [2., 0.], [2., 2.], [1., 1.], [0., 2.]]
}

/// A 4 x 4 square with a triangular hole touching it at `corner`
pub fn square_with_touching_hole(corner: usize) -> Vec<Vec<[f64; 2]>> {
    let hole = match corner % 4 {
        0 => vec![[0., 0.], [2., 1.], [1., 2.]],
        1 => vec![[4., 0.], [3., 2.], [2., 1.]],
        2 => vec![[4., 4.], [2., 3.], [3., 2.]],
        _ => vec![[0., 4.], [1., 2.], [2., 3.]],
    };
    vec![vec![[0., 0.], [4., 0.], [4., 4.], [0., 4.]], hole]
}

/// A 4 x 4 square with an extra vertex halfway along its bottom edge, where a triangular hole touches it
pub fn square_with_hole_at_edge() -> Vec<Vec<[f64; 2]>> {
    vec![
        vec![[0., 0.], [2., 0.], [4., 0.], [4., 4.], [0., 4.]],
        vec![[2., 0.], [3., 1.], [1., 1.]],
    ]
}

/// Two triangles whose lowest vertex is the same point
pub fn shared_lowest_vertex() -> Vec<Vec<[f64; 2]>> {
    vec![
        vec![[1., 1.], [3., 2.], [2., 3.]],
        vec![[1., 1.], [0., 3.], [-1., 2.]],
    ]
}

pub fn hollow_square() -> Vec<Vec<[f64; 2]>> {
    vec![
        vec![[0., 0.], [0., 1.], [1., 1.], [1., 0.]],
        vec![[0.05, 0.05], [0.05, 0.95], [0.95, 0.95], [0.95, 0.05]],
    ]
}

/// `n` vertices evenly spaced on a circle of radius 100, counterclockwise
pub fn regular(n: usize) -> Vec<[f64; 2]> {
    (0..n).map(|i| {
        let theta = std::f64::consts::PI * 2. * (i as f64) / (n as f64);
        let (s, c) = theta.sin_cos();
        [c * 100., s * 100.]
    }).collect()
}

pub fn all() -> Vec<Vec<VTest>> {
    vec![square(), star(), half_frame()]
}
