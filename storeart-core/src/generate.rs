//! Turning a source image and a list of targets into files.

use crate::{
    color::Color,
    compose::compose,
    output::{Artifact, OutputDir},
    resize::ImageResizer,
    source::SourceImage,
    target::{IconTarget, ScreenshotTarget},
    Error,
};
use image::DynamicImage;
use rayon::prelude::*;

/// How the artifacts of one generator are produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Execution {
    #[default]
    Sequential,
    /// Generates artifacts on the rayon thread pool. Results are still returned in declared order.
    Parallel,
}

impl Execution {
    pub fn from_parallel_flag(parallel: bool) -> Self {
        if parallel {
            Execution::Parallel
        } else {
            Execution::Sequential
        }
    }

    /// Generates every target and hands each artifact to `on_artifact` in declared order.
    ///
    /// Sequential runs call `on_artifact` as soon as a file is written, so the files written
    /// before a failure have been seen. Parallel runs call it once every file is written.
    fn run<T, F, E, R>(
        self,
        targets: &[T],
        generate: F,
        mut on_artifact: R,
    ) -> Result<Vec<Artifact>, E>
    where
        T: Sync,
        F: Fn(&T) -> Result<Artifact, Error> + Sync + Send,
        E: From<Error>,
        R: FnMut(&Artifact) -> Result<(), E>,
    {
        match self {
            Execution::Sequential => {
                let mut artifacts = Vec::with_capacity(targets.len());
                for target in targets {
                    let artifact = generate(target)?;
                    on_artifact(&artifact)?;
                    artifacts.push(artifact);
                }
                Ok(artifacts)
            }
            Execution::Parallel => {
                let artifacts = targets
                    .par_iter()
                    .map(generate)
                    .collect::<Result<Vec<_>, Error>>()?;
                for artifact in &artifacts {
                    on_artifact(artifact)?;
                }
                Ok(artifacts)
            }
        }
    }
}

/// Writes one resized copy of the source per icon target.
#[derive(Debug, Clone)]
pub struct IconSizeGenerator {
    targets: Vec<IconTarget>,
    resizer: ImageResizer,
    execution: Execution,
}

impl IconSizeGenerator {
    pub fn new(targets: Vec<IconTarget>) -> Self {
        IconSizeGenerator {
            targets,
            resizer: ImageResizer::default(),
            execution: Execution::default(),
        }
    }

    pub fn with_execution(mut self, execution: Execution) -> Self {
        self.execution = execution;
        self
    }

    pub fn targets(&self) -> &[IconTarget] {
        &self.targets
    }

    pub fn render(&self, source: &SourceImage, target: &IconTarget) -> DynamicImage {
        self.resizer.resize_square(source, target.size)
    }

    pub fn generate(
        &self,
        source: &SourceImage,
        output: &OutputDir,
    ) -> Result<Vec<Artifact>, Error> {
        self.generate_with(source, output, |_| Ok(()))
    }

    /// Like [`generate`](Self::generate), calling `on_artifact` for every file written.
    pub fn generate_with<E, R>(
        &self,
        source: &SourceImage,
        output: &OutputDir,
        on_artifact: R,
    ) -> Result<Vec<Artifact>, E>
    where
        E: From<Error>,
        R: FnMut(&Artifact) -> Result<(), E>,
    {
        self.execution.run(
            &self.targets,
            |target| output.write_png(&target.file_name, &self.render(source, target)),
            on_artifact,
        )
    }
}

/// Writes one screenshot per target: the resized source centered on a solid background.
#[derive(Debug, Clone)]
pub struct ScreenshotComposer {
    targets: Vec<ScreenshotTarget>,
    background: Color,
    resizer: ImageResizer,
    execution: Execution,
}

impl ScreenshotComposer {
    pub fn new(targets: Vec<ScreenshotTarget>, background: Color) -> Self {
        ScreenshotComposer {
            targets,
            background,
            resizer: ImageResizer::default(),
            execution: Execution::default(),
        }
    }

    pub fn with_execution(mut self, execution: Execution) -> Self {
        self.execution = execution;
        self
    }

    pub fn targets(&self) -> &[ScreenshotTarget] {
        &self.targets
    }

    pub fn render(&self, source: &SourceImage, target: &ScreenshotTarget) -> DynamicImage {
        let icon = self.resizer.resize_square(source, target.icon_size);
        let offset = target.icon_offset();
        tracing::debug!(
            file_name = %target.file_name,
            x = offset.0,
            y = offset.1,
            "placing icon"
        );
        DynamicImage::ImageRgb8(compose(
            self.background,
            target.canvas_width,
            target.canvas_height,
            &icon,
            offset,
        ))
    }

    pub fn generate(
        &self,
        source: &SourceImage,
        output: &OutputDir,
    ) -> Result<Vec<Artifact>, Error> {
        self.generate_with(source, output, |_| Ok(()))
    }

    /// Like [`generate`](Self::generate), calling `on_artifact` for every file written.
    pub fn generate_with<E, R>(
        &self,
        source: &SourceImage,
        output: &OutputDir,
        on_artifact: R,
    ) -> Result<Vec<Artifact>, E>
    where
        E: From<Error>,
        R: FnMut(&Artifact) -> Result<(), E>,
    {
        self.execution.run(
            &self.targets,
            |target| output.write_png(&target.file_name, &self.render(source, target)),
            on_artifact,
        )
    }
}
