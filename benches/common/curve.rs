use bezedit::config::FrameSettings;
use bezedit::curve::{castlejau_eval, sample_curve};
use bezedit::InteractionController;
use criterion::{black_box, Criterion};

use crate::common::samples::{CURVES, SESSION};

pub fn eval(c: &mut Criterion) {
    c.bench_function("eval", |b| {
        for points in CURVES.iter() {
            b.iter(|| black_box(castlejau_eval(points, 0.5)))
        }
    });
}

pub fn sample(c: &mut Criterion) {
    c.bench_function("sample", |b| {
        for points in CURVES.iter() {
            b.iter(|| black_box(sample_curve(points, 2000)))
        }
    });
}

pub fn session(c: &mut Criterion) {
    let settings = FrameSettings::default();
    c.bench_function("session", |b| {
        b.iter(|| {
            let mut controller = InteractionController::default();
            for &event in SESSION.iter() {
                let _ = controller.handle(event);
                black_box(controller.frame(&settings));
            }
        })
    });
}

pub fn all(c: &mut Criterion) {
    eval(c);
    sample(c);
    session(c);
}
