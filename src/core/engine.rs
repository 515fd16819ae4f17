use crate::domain::model::Age;
use crate::domain::ports::Pipeline;
use crate::utils::error::Result;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};

const EXIT_COMMANDS: [&str; 2] = ["quit", "exit"];

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionSummary {
    pub computed: usize,
    pub rejected: usize,
}

pub struct ReportEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> ReportEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    pub fn pipeline(&self) -> &P {
        &self.pipeline
    }

    /// Computes one report for `raw_age` and hands it to the pipeline's
    /// load step. Returns where the report went.
    pub async fn run(&self, raw_age: &str) -> Result<String> {
        tracing::info!("Starting debt calculation");

        let data = self.pipeline.extract().await?;
        tracing::debug!(
            "Loaded {} demographic records and {} leadership percentages",
            data.demographics.len(),
            data.leadership.len()
        );

        let age = Age::parse(raw_age)?;
        let report = self.pipeline.transform(&data, age)?;
        let destination = self.pipeline.load(report).await?;

        tracing::info!("Report written to: {}", destination);
        Ok(destination)
    }

    /// Line-oriented session: each line is one age, each answer is written
    /// to `output`. A rejected line is reported and the session goes on.
    pub async fn run_interactive<R, W>(&self, input: R, output: &mut W) -> Result<SessionSummary>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        let data = self.pipeline.extract().await?;
        let mut summary = SessionSummary::default();
        let mut lines = input.lines();

        while let Some(line) = lines.next_line().await? {
            let entry = line.trim();
            if EXIT_COMMANDS.contains(&entry) {
                break;
            }

            let outcome = Age::parse(entry)
                .and_then(|age| self.pipeline.transform(&data, age))
                .and_then(|report| self.pipeline.present(&report));

            match outcome {
                Ok(rendered) => {
                    summary.computed += 1;
                    output.write_all(rendered.as_bytes()).await?;
                }
                Err(e) => {
                    summary.rejected += 1;
                    tracing::warn!("Rejected input {:?}: {}", entry, e);
                    let message = format!("❌ {}\n", e.user_friendly_message());
                    output.write_all(message.as_bytes()).await?;
                }
            }
            output.flush().await?;
        }

        tracing::info!(
            "Session finished: {} computed, {} rejected",
            summary.computed,
            summary.rejected
        );
        Ok(summary)
    }
}
