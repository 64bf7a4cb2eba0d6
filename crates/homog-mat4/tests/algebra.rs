use approx::assert_relative_eq;
use homog_mat4::{compose, Mat4, IDENTITY};
use rand::{rngs::StdRng, Rng, SeedableRng};

// Diagonally dominant, hence well-conditioned and invertible.
fn random_invertible(rng: &mut StdRng) -> Mat4 {
    Mat4(std::array::from_fn(|i| {
        std::array::from_fn(|j| {
            let v: f64 = rng.random_range(-1.0..1.0);
            if i == j {
                v + 5.0
            } else {
                v
            }
        })
    }))
}

fn random_mat(rng: &mut StdRng) -> Mat4 {
    Mat4(std::array::from_fn(|_| {
        std::array::from_fn(|_| rng.random_range(-10.0..10.0))
    }))
}

fn assert_mat_near(a: &Mat4, b: &Mat4, epsilon: f64) {
    for i in 0..4 {
        for j in 0..4 {
            assert_relative_eq!(a[i][j], b[i][j], epsilon = epsilon);
        }
    }
}

#[test]
fn identity_is_two_sided_neutral() -> Result<(), Box<dyn std::error::Error>> {
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..32 {
        let m = random_mat(&mut rng);
        assert_eq!(compose(&[IDENTITY, m])?, m);
        assert_eq!(compose(&[m, IDENTITY])?, m);
    }
    Ok(())
}

#[test]
fn composition_is_associative() -> Result<(), Box<dyn std::error::Error>> {
    let mut rng = StdRng::seed_from_u64(11);
    for _ in 0..32 {
        let (a, b, c) = (random_mat(&mut rng), random_mat(&mut rng), random_mat(&mut rng));
        let left = compose(&[compose(&[a, b])?, c])?;
        let right = compose(&[a, compose(&[b, c])?])?;
        assert_mat_near(&left, &right, 1e-9);
        assert_mat_near(&compose(&[a, b, c])?, &left, 1e-9);
    }
    Ok(())
}

#[test]
fn inverse_composes_to_identity() -> Result<(), Box<dyn std::error::Error>> {
    let mut rng = StdRng::seed_from_u64(13);
    for _ in 0..64 {
        let m = random_invertible(&mut rng);
        let inv = m.inverse();
        assert!(inv.is_finite());
        assert_mat_near(&compose(&[m, inv])?, &IDENTITY, 1e-9);
        assert_mat_near(&compose(&[inv, m])?, &IDENTITY, 1e-9);
    }
    Ok(())
}

#[test]
fn double_inverse_round_trips() {
    let mut rng = StdRng::seed_from_u64(17);
    for _ in 0..64 {
        let m = random_invertible(&mut rng);
        assert_mat_near(&m.inverse().inverse(), &m, 1e-9);
    }
}

#[test]
fn checked_inverse_agrees_with_unchecked() -> Result<(), Box<dyn std::error::Error>> {
    let mut rng = StdRng::seed_from_u64(19);
    for _ in 0..16 {
        let m = random_invertible(&mut rng);
        assert_eq!(m.try_inverse(1e-9)?, m.inverse());
    }
    Ok(())
}

#[test]
fn determinant_is_multiplicative() {
    let mut rng = StdRng::seed_from_u64(23);
    for _ in 0..16 {
        let (a, b) = (random_invertible(&mut rng), random_invertible(&mut rng));
        let det_ab = (a * b).determinant();
        assert_relative_eq!(det_ab, a.determinant() * b.determinant(), max_relative = 1e-9);
        assert_relative_eq!(a.inverse().determinant(), 1.0 / a.determinant(), max_relative = 1e-9);
    }
}

#[test]
fn double_transpose_is_exact() {
    let mut rng = StdRng::seed_from_u64(29);
    for _ in 0..32 {
        let m = random_mat(&mut rng);
        assert_eq!(m.transpose().transpose(), m);
    }
}

#[test]
fn transpose_reverses_products() {
    let mut rng = StdRng::seed_from_u64(31);
    let (a, b) = (random_mat(&mut rng), random_mat(&mut rng));
    assert_mat_near(&(a * b).transpose(), &(b.transpose() * a.transpose()), 1e-9);
}
