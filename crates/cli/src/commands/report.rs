use clap::Subcommand;
use ferrous_audit_infrastructure::output::JsonResultWriter;
use ferrous_audit_infrastructure::report::{
    merge_reports, read_report, summarize_labels, write_csv, ReportFilter,
};
use std::io::{self, Write};

/// Tools over a finished JSON report.
#[derive(Subcommand, Debug)]
pub enum ReportCommand {
    /// Keep findings whose fields match regular expressions
    Grep {
        /// Report to read, or '-' for stdin
        #[arg(short = 'i', long, default_value = "-")]
        input: String,

        /// Output file, or '-' for stdout
        #[arg(short = 'o', long, default_value = "-")]
        output: String,

        /// Pattern for the record name
        #[arg(short = 'n', long)]
        name: Option<String>,

        /// Pattern for the target
        #[arg(short = 't', long)]
        target: Option<String>,

        /// Pattern for the check identifier
        #[arg(short = 'c', long)]
        check: Option<String>,

        /// Pattern for the description
        #[arg(short = 'd', long)]
        description: Option<String>,

        /// Keep findings that do not match
        #[arg(short = 'v', long)]
        invert_match: bool,
    },

    /// Export selected fields as CSV on stdout
    Csv {
        /// Reports to read; stdin when none are given
        #[arg(value_name = "REPORT")]
        inputs: Vec<String>,

        /// Field to export, in column order (repeatable)
        #[arg(short = 'f', long = "field", required = true)]
        fields: Vec<String>,
    },

    /// Merge reports from several runs, one finding per name, check and target
    Uniq {
        /// Report to read (repeatable)
        #[arg(short = 'i', long = "input", required = true)]
        inputs: Vec<String>,

        /// Output file, or '-' for stdout
        #[arg(short = 'o', long, default_value = "-")]
        output: String,
    },

    /// Count cname findings by the trailing labels of a field
    Labels {
        /// Report to read, or '-' for stdin
        #[arg(short = 'i', long, default_value = "-")]
        input: String,

        /// Number of trailing labels to group by
        #[arg(short = 'l', long, default_value_t = 1)]
        labels: usize,

        /// Field holding the name to group
        #[arg(short = 'f', long, default_value = "target")]
        field: String,
    },
}

pub fn run_report_command(command: ReportCommand) -> anyhow::Result<()> {
    match command {
        ReportCommand::Grep {
            input,
            output,
            name,
            target,
            check,
            description,
            invert_match,
        } => {
            let mut filter = ReportFilter::new().inverted(invert_match);
            for (field, pattern) in [
                ("name", name),
                ("target", target),
                ("check", check),
                ("description", description),
            ] {
                if let Some(pattern) = pattern {
                    filter = filter.with_pattern(field, &pattern)?;
                }
            }

            let writer = JsonResultWriter::open(&output)?;
            let kept = filter.apply(read_report(&input)?)?;
            let matched = kept.len();
            writer.write(&kept)?;
            eprintln!("Matched {} records", matched);
        }
        ReportCommand::Csv { inputs, fields } => {
            let inputs = if inputs.is_empty() {
                vec!["-".to_string()]
            } else {
                inputs
            };

            let mut entries = Vec::new();
            for input in &inputs {
                entries.extend(read_report(input)?);
            }

            let stdout = io::stdout();
            write_csv(&mut stdout.lock(), &fields, &entries)?;
        }
        ReportCommand::Uniq { inputs, output } => {
            let writer = JsonResultWriter::open(&output)?;
            let reports = inputs
                .iter()
                .map(|input| read_report(input))
                .collect::<Result<Vec<_>, _>>()?;
            let merged = merge_reports(reports);
            let written = merged.len();
            writer.write(&merged)?;
            eprintln!("Wrote {} records", written);
        }
        ReportCommand::Labels {
            input,
            labels,
            field,
        } => {
            let entries = read_report(&input)?;
            let stdout = io::stdout();
            let mut out = stdout.lock();
            for row in summarize_labels(&entries, labels, &field) {
                writeln!(out, "{}\t{}", row.count, row.suffix)?;
            }
        }
    }

    Ok(())
}
