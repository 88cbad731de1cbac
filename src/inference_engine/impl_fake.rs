use crate::inference_engine::interface::{InferenceEngine, InferenceOutput, OutputTensor};
use crate::library::logger::interface::Logger;
use image::DynamicImage;
use rand::distr::{Distribution, Uniform};
use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

enum Behaviour {
    /// Replays the queued results, repeating the last one once the queue is drained.
    Scripted(Mutex<VecDeque<Result<InferenceOutput, String>>>),
    /// Flat count vector with a random count per channel.
    Random { channels: usize, max_count: u32 },
}

pub struct InferenceEngineFake {
    behaviour: Behaviour,
    calls: AtomicUsize,
    logger: Arc<dyn Logger + Send + Sync>,
}

impl InferenceEngineFake {
    pub fn new(logger: Arc<dyn Logger + Send + Sync>) -> Self {
        Self::scripted(logger, vec![Ok(InferenceOutput::default())])
    }

    pub fn scripted(
        logger: Arc<dyn Logger + Send + Sync>,
        results: Vec<Result<InferenceOutput, String>>,
    ) -> Self {
        Self {
            behaviour: Behaviour::Scripted(Mutex::new(results.into())),
            calls: AtomicUsize::new(0),
            logger: logger.with_namespace("inference_engine").with_namespace("fake"),
        }
    }

    pub fn random(logger: Arc<dyn Logger + Send + Sync>, channels: usize, max_count: u32) -> Self {
        Self {
            behaviour: Behaviour::Random {
                channels,
                max_count,
            },
            calls: AtomicUsize::new(0),
            logger: logger.with_namespace("inference_engine").with_namespace("fake"),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn next_scripted(
        queue: &Mutex<VecDeque<Result<InferenceOutput, String>>>,
    ) -> Result<InferenceOutput, Box<dyn std::error::Error + Send + Sync>> {
        let mut queue = queue.lock().map_err(|e| e.to_string())?;
        let next = if queue.len() > 1 {
            queue.pop_front()
        } else {
            queue.front().cloned()
        };

        match next {
            Some(Ok(output)) => Ok(output),
            Some(Err(message)) => Err(message.into()),
            None => Ok(InferenceOutput::default()),
        }
    }

    fn random_counts(
        channels: usize,
        max_count: u32,
    ) -> Result<InferenceOutput, Box<dyn std::error::Error + Send + Sync>> {
        let mut rng = rand::rng();
        let count_dist = Uniform::new_inclusive(0, max_count)?;

        let data: Vec<f32> = (0..channels)
            .map(|_| count_dist.sample(&mut rng) as f32)
            .collect();

        Ok(InferenceOutput::tensor(OutputTensor::new(
            "counts",
            vec![1, channels],
            data,
        )))
    }
}

impl InferenceEngine for InferenceEngineFake {
    fn infer(
        &self,
        frame: &DynamicImage,
    ) -> Result<InferenceOutput, Box<dyn std::error::Error + Send + Sync>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.logger.info(&format!(
            "infer on {}x{} frame",
            frame.width(),
            frame.height()
        ))?;

        match &self.behaviour {
            Behaviour::Scripted(queue) => Self::next_scripted(queue),
            Behaviour::Random {
                channels,
                max_count,
            } => Self::random_counts(*channels, *max_count),
        }
    }
}
