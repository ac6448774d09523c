// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use criterion::{criterion_group, criterion_main, Criterion};
use starfractal::{
    Canvas, Configuration, FractalScheduler, PlaneMapper, RecordingSink, State, Ticker,
};

fn run_to_completion(config: Configuration) -> u64 {
    let mut scheduler = FractalScheduler::new(RecordingSink::new(), Ticker::new());
    if scheduler.start(config).is_err() {
        return 0;
    }
    while scheduler.state() == State::Running {
        scheduler.tick();
    }
    scheduler.drawn()
}

fn expansion(c: &mut Criterion) {
    c.bench_function("expand 6 spikes, depth 5", |b| {
        let config = Configuration::default()
            .with_spike_count(6)
            .with_max_depth(5);
        b.iter(|| run_to_completion(config))
    });
}

fn rasterize(c: &mut Criterion) {
    c.bench_function("render 5 spikes, depth 4", |b| {
        let plane = PlaneMapper::identity(800, 800).unwrap();
        let mut scheduler = FractalScheduler::new(Canvas::new(plane), Ticker::new());
        scheduler
            .start(Configuration::default().with_max_depth(4))
            .unwrap();
        Ticker::drive(&mut scheduler, None, |_, _, _| {});
        b.iter(|| scheduler.sink().render())
    });
}

criterion_group!(benches, expansion, rasterize);
criterion_main!(benches);
