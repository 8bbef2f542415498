//! Algebraic laws of the engine, checked with proptest
//!
//! - sum is commutative
//! - subtract(a, b) == sum(a, negate(b))
//! - sum/subtract preserve shape, products follow the rank's shape rule
//! - m * inverse(m) is the identity for invertible 2x2 matrices

use proptest::collection::vec;
use proptest::prelude::*;
use tensorcalc_linalg::{inverse_2x2, multiply, multiply_matrices, negate, subtract, sum};
use tensorcalc_types::{Cube, Matrix, Tensor};

fn entry() -> impl Strategy<Value = f64> {
    -1000.0..1000.0f64
}

fn same_shape_pair() -> impl Strategy<Value = (Tensor, Tensor)> {
    let vectors = (1usize..8)
        .prop_flat_map(|n| (vec(entry(), n), vec(entry(), n)))
        .prop_map(|(a, b)| {
            (
                Tensor::vector(a).unwrap(),
                Tensor::vector(b).unwrap(),
            )
        });

    let matrices = (1usize..5, 1usize..5)
        .prop_flat_map(|(r, c)| (Just(r), Just(c), vec(entry(), r * c), vec(entry(), r * c)))
        .prop_map(|(r, c, a, b)| {
            (
                Tensor::Matrix(Matrix::new(a, r, c).unwrap()),
                Tensor::Matrix(Matrix::new(b, r, c).unwrap()),
            )
        });

    let cubes = (1usize..4, 1usize..4, 1usize..4)
        .prop_flat_map(|(l, r, c)| {
            let n = l * r * c;
            (Just((l, r, c)), vec(entry(), n), vec(entry(), n))
        })
        .prop_map(|((l, r, c), a, b)| {
            (
                Tensor::Cube(Cube::new(a, l, r, c).unwrap()),
                Tensor::Cube(Cube::new(b, l, r, c).unwrap()),
            )
        });

    prop_oneof![vectors, matrices, cubes]
}

fn cube_3x3x3() -> impl Strategy<Value = Tensor> {
    vec(entry(), 27).prop_map(|data| Tensor::Cube(Cube::new(data, 3, 3, 3).unwrap()))
}

proptest! {
    #[test]
    fn sum_is_commutative((a, b) in same_shape_pair()) {
        prop_assert_eq!(sum(&a, &b).unwrap(), sum(&b, &a).unwrap());
    }

    #[test]
    fn subtract_is_sum_of_negation((a, b) in same_shape_pair()) {
        let direct = subtract(&a, &b).unwrap();
        let via_negation = sum(&a, &negate(&b).unwrap()).unwrap();
        prop_assert_eq!(direct, via_negation);
    }

    #[test]
    fn elementwise_preserves_shape((a, b) in same_shape_pair()) {
        prop_assert_eq!(sum(&a, &b).unwrap().shape(), a.shape());
        prop_assert_eq!(subtract(&a, &b).unwrap().shape(), a.shape());
    }

    #[test]
    fn vector_product_preserves_length(
        (a, b) in (1usize..8).prop_flat_map(|n| (vec(entry(), n), vec(entry(), n)))
    ) {
        let len = a.len();
        let product = multiply(&Tensor::vector(a).unwrap(), &Tensor::vector(b).unwrap()).unwrap();
        prop_assert_eq!(product.shape().dims().to_vec(), vec![len]);
    }

    #[test]
    fn cube_product_is_3x3x3(a in cube_3x3x3(), b in cube_3x3x3()) {
        prop_assert_eq!(multiply(&a, &b).unwrap().shape().dims().to_vec(), vec![3, 3, 3]);
    }

    #[test]
    fn matrix_product_shape(
        (r, k, c) in (1usize..5, 1usize..5, 1usize..5),
        seed in entry(),
    ) {
        let a = Matrix::new(vec![seed; r * k], r, k).unwrap();
        let b = Matrix::new(vec![seed; k * c], k, c).unwrap();
        let product = multiply_matrices(&a, &b).unwrap();
        prop_assert_eq!((product.rows(), product.cols()), (r, c));
    }

    #[test]
    fn inverse_round_trip(entries in vec(-10.0..10.0f64, 4)) {
        let m = Matrix::new(entries, 2, 2).unwrap();
        let det = m[(0, 0)] * m[(1, 1)] - m[(0, 1)] * m[(1, 0)];
        prop_assume!(det.abs() > 1e-3);

        let inv = inverse_2x2(&m).unwrap();
        let product = multiply_matrices(&m, &inv).unwrap();
        let identity = Matrix::identity(2).unwrap();
        for (got, want) in product.data().iter().zip(identity.data()) {
            prop_assert!((got - want).abs() < 1e-6, "{} vs {}", got, want);
        }
    }
}
