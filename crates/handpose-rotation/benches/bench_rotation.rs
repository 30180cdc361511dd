use criterion::{black_box, criterion_group, criterion_main, Criterion};

use handpose_rotation::{axis_angle_to_rotation_matrix, rotation_matrix_to_axis_angle};
use handpose_tensor::Tensor;
use rand::Rng;

fn bench_axis_angle_to_rotation_matrix(c: &mut Criterion) {
    let mut group = c.benchmark_group("axis_angle_to_rotation_matrix");
    let mut rng = rand::rng();

    // batch sizes times the 16 MANO pose joints
    for batch in [1, 32, 256] {
        let data: Vec<f32> = (0..batch * 16 * 3)
            .map(|_| rng.random_range(-3.0f32..3.0))
            .collect();
        let aa = Tensor::<f32, 3>::from_shape_vec([batch, 16, 3], data).unwrap();

        group.bench_function(format!("batch_{}", batch), |bencher| {
            bencher.iter(|| {
                black_box(axis_angle_to_rotation_matrix::<3, 4>(&aa).unwrap())
            })
        });
    }

    group.finish();
}

fn bench_rotation_matrix_to_axis_angle(c: &mut Criterion) {
    let mut group = c.benchmark_group("rotation_matrix_to_axis_angle");
    let mut rng = rand::rng();

    for batch in [1, 32, 256] {
        let data: Vec<f32> = (0..batch * 16 * 3)
            .map(|_| rng.random_range(-3.0f32..3.0))
            .collect();
        let aa = Tensor::<f32, 3>::from_shape_vec([batch, 16, 3], data).unwrap();
        let rotmat = axis_angle_to_rotation_matrix::<3, 4>(&aa).unwrap();

        group.bench_function(format!("batch_{}", batch), |bencher| {
            bencher.iter(|| {
                black_box(rotation_matrix_to_axis_angle::<4, 3>(&rotmat).unwrap())
            })
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_axis_angle_to_rotation_matrix,
    bench_rotation_matrix_to_axis_angle
);
criterion_main!(benches);
