mod scenes;

use anyhow::{ensure, Context, Result};
use itertools::iproduct;
use log::{info, warn};
use lumen::aliases::{RandGen, Vec3};
use lumen::camera::Camera;
use lumen::radiance;
use lumen::scene::Scene;
use rand::{Rng, SeedableRng};
use std::sync::mpsc::{channel, Sender};
use std::time::Instant;

const IMAGE_WIDTH: usize = 512;
const IMAGE_HEIGHT: usize = 512;
const SAMPLES_PER_PIXEL: usize = 256;
const THREAD_CNT: usize = 4;
const REPORT_INTERVAL: usize = 32;
const BASE_SEED: u64 = 0x5eed;
/// Exponent applied per channel before quantization.
const GAMMA_EXPONENT: f32 = 0.6;

struct ColorSum {
    nx: usize,
    ny: usize,
    count: usize,
    sum: Vec<Vec3>,
}

impl ColorSum {
    fn zero(nx: usize, ny: usize) -> Self {
        ColorSum {
            nx,
            ny,
            count: 0,
            sum: vec![Vec3::zeros(); nx * ny],
        }
    }
    fn replace_zero(&mut self) -> ColorSum {
        let (nx, ny) = (self.nx, self.ny);
        std::mem::replace(self, ColorSum::zero(nx, ny))
    }
    fn add(&mut self, rhs: ColorSum) {
        debug_assert_eq!((self.nx, self.ny), (rhs.nx, rhs.ny));
        self.count += rhs.count;
        for (acc, v) in self.sum.iter_mut().zip(rhs.sum.iter()) {
            *acc += v;
        }
    }
    fn save_png(&self, path: &str) -> Result<()> {
        debug_assert!(self.count > 0);
        let mut buffer = vec![0u8; self.nx * self.ny * 3];
        for (idx, col) in self.sum.iter().enumerate() {
            let col = col / self.count as f32;
            for ch in 0..3 {
                buffer[idx * 3 + ch] =
                    (255.99 * col[ch].clamp(0.0, 1.0).powf(GAMMA_EXPONENT)) as u8;
            }
        }
        image::save_buffer(
            path,
            &buffer,
            self.nx as u32,
            self.ny as u32,
            image::ColorType::Rgb8,
        )
        .with_context(|| format!("saving {}", path))
    }
}

fn trace_rays(
    scene: &Scene,
    camera: &Camera,
    samples: usize,
    seed: u64,
    report_interval: usize,
    tx: Sender<ColorSum>,
) {
    let mut rng = RandGen::seed_from_u64(seed);
    let mut color_sum = ColorSum::zero(IMAGE_WIDTH, IMAGE_HEIGHT);
    for _ in 0..samples {
        for (j, i) in iproduct!(0..IMAGE_HEIGHT, 0..IMAGE_WIDTH) {
            let u = (i as f32 + rng.gen::<f32>()) / IMAGE_WIDTH as f32;
            let v = (j as f32 + rng.gen::<f32>()) / IMAGE_HEIGHT as f32;
            let ray = camera.primary_ray(u, v);
            let col = match scene.intersect(&ray) {
                Some(hit) => radiance(&ray, &hit, scene, &mut rng, 0),
                None => scene.background,
            };
            let idx = i + (IMAGE_HEIGHT - j - 1) * IMAGE_WIDTH;
            color_sum.sum[idx] += col;
        }
        color_sum.count += 1;
        if color_sum.count % report_interval == 0 {
            tx.send(color_sum.replace_zero()).unwrap();
        }
    }
    if color_sum.count > 0 {
        tx.send(color_sum).unwrap();
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let output = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "cornell.png".to_string());
    ensure!(
        SAMPLES_PER_PIXEL % THREAD_CNT == 0,
        "SAMPLES_PER_PIXEL must be a multiple of THREAD_CNT"
    );
    ensure!(
        REPORT_INTERVAL % THREAD_CNT == 0,
        "REPORT_INTERVAL must be a multiple of THREAD_CNT"
    );
    let start = Instant::now();
    let (scene, camera) = scenes::cornell_box(IMAGE_WIDTH as f32 / IMAGE_HEIGHT as f32);
    info!("scene built in {:.3}s", start.elapsed().as_secs_f32());

    let samples_per_thread = SAMPLES_PER_PIXEL / THREAD_CNT;
    let final_sum = crossbeam::scope(|scope| {
        let (tx, rx) = channel::<ColorSum>();
        let scene = &scene;
        let camera = &camera;
        let mut workers = Vec::new();
        for t in 0..THREAD_CNT {
            let tx = tx.clone();
            workers.push(scope.spawn(move |_| {
                trace_rays(
                    scene,
                    camera,
                    samples_per_thread,
                    BASE_SEED + t as u64,
                    REPORT_INTERVAL / THREAD_CNT,
                    tx,
                );
            }));
        }
        // the collector finishes once every worker's sender is gone
        drop(tx);
        let progressive_path = output.clone();
        let collector = scope.spawn(move |_| {
            let mut current = ColorSum::zero(IMAGE_WIDTH, IMAGE_HEIGHT);
            let mut batches = 0usize;
            while let Ok(partial) = rx.recv() {
                current.add(partial);
                batches += 1;
                if batches % THREAD_CNT == 0 {
                    info!(
                        "{} samples per pixel accumulated ({:.1}s)",
                        current.count,
                        start.elapsed().as_secs_f32()
                    );
                    if let Err(err) = current.save_png(&progressive_path) {
                        warn!("progressive save failed: {:#}", err);
                    }
                }
            }
            current
        });
        for worker in workers {
            worker.join().unwrap();
        }
        collector.join().unwrap()
    })
    .unwrap();

    final_sum.save_png(&output)?;
    info!(
        "render complete: {} samples per pixel in {:.1}s, written to {}",
        final_sum.count,
        start.elapsed().as_secs_f32(),
        output
    );
    Ok(())
}
