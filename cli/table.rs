use std::fmt::Write as _;
use std::io::{self, Write};

use ferrite_perceptron::{TraceRecord, TraceSink};

/// Renders trace records as the classic perceptron training table, one row
/// per unit and sample:
///
/// ```text
///  unit   b  x1  x2   z     w0     w1     w2   y      d    w0'    w1'    w2'
/// ```
#[derive(Debug)]
pub struct TableSink<W = io::Stdout> {
    out: W,
    header_printed: bool,
    row: String,
}

impl TableSink {
    pub fn new() -> Self {
        TableSink::to_writer(io::stdout())
    }
}

impl<W: Write + Send> TableSink<W> {
    pub fn to_writer(out: W) -> Self {
        TableSink { out, header_printed: false, row: String::new() }
    }

    fn print_header(&mut self, width: usize) {
        let mut header = String::from(" unit   b");
        for i in 1..width {
            let _ = write!(header, " {:>3}", format!("x{}", i));
        }
        header.push_str("   z");
        for i in 0..width {
            let _ = write!(header, " {:>6}", format!("w{}", i));
        }
        header.push_str("   y      d");
        for i in 0..width {
            let _ = write!(header, " {:>6}", format!("w{}'", i));
        }
        // stdout errors are not worth aborting a training run over
        let _ = writeln!(self.out, "Training:");
        let _ = writeln!(self.out, "{}", header);
        self.header_printed = true;
    }

    #[cfg(test)]
    fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write + Send> TraceSink for TableSink<W> {
    fn record(&mut self, record: TraceRecord) {
        match record {
            TraceRecord::Step { unit, inputs, expected, weights, output } => {
                if !self.header_printed {
                    self.print_header(inputs.len());
                }
                self.row.clear();
                let _ = write!(self.row, "{:>5}", unit.to_string());
                for x in &inputs {
                    let _ = write!(self.row, " {:>3}", x);
                }
                let _ = write!(self.row, " {:>3}", expected);
                for w in &weights {
                    let _ = write!(self.row, " {:>6.2}", w);
                }
                let _ = write!(self.row, " {:>3}", output);
            }
            TraceRecord::Update { correction, weights, .. } => {
                let _ = write!(self.row, " {:>6.2}", correction);
                for w in &weights {
                    let _ = write!(self.row, " {:>6.2}", w);
                }
                let _ = writeln!(self.out, "{}", self.row);
                self.row.clear();
            }
        }
    }
}
