//! Plain-text instance files.
//!
//! Format: the first non-empty line is the capacity; every following
//! non-empty line is `weight profit`, separated by whitespace.

use std::fs::{File, OpenOptions};
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use crate::error::{KnapsackError, KnapsackResult};
use crate::instance::Instance;

/// Parse an instance from `reader`.
pub fn read_instance<R: BufRead>(reader: R) -> KnapsackResult<Instance> {
    let mut capacity = None;
    let mut weights = Vec::new();
    let mut profits = Vec::new();

    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        let line_no = idx + 1;
        let mut fields = line.split_whitespace();
        let Some(first) = fields.next() else {
            continue;
        };
        if capacity.is_none() {
            capacity = Some(parse_field(first, line_no, "capacity")?);
            expect_end(fields.next(), line_no)?;
            continue;
        }
        let second = fields.next().ok_or_else(|| KnapsackError::Parse {
            line: line_no,
            message: "expected `weight profit`".into(),
        })?;
        weights.push(parse_field(first, line_no, "weight")?);
        profits.push(parse_field(second, line_no, "profit")?);
        expect_end(fields.next(), line_no)?;
    }

    let capacity = capacity.ok_or(KnapsackError::Parse {
        line: 1,
        message: "missing capacity line".into(),
    })?;
    Instance::new(Some(capacity), weights, profits)
}

/// Write `instance` to `writer`. An unset capacity is written resolved.
pub fn write_instance<W: Write>(instance: &Instance, mut writer: W) -> KnapsackResult<()> {
    writeln!(writer, "{}", instance.capacity())?;
    for (w, p) in instance.items() {
        writeln!(writer, "{w} {p}")?;
    }
    writer.flush()?;
    Ok(())
}

pub fn load<P: AsRef<Path>>(path: P) -> KnapsackResult<Instance> {
    read_instance(BufReader::new(File::open(path)?))
}

/// Save to a new file; an existing file is never overwritten.
pub fn save<P: AsRef<Path>>(instance: &Instance, path: P) -> KnapsackResult<()> {
    let file = OpenOptions::new().write(true).create_new(true).open(path)?;
    write_instance(instance, BufWriter::new(file))
}

fn parse_field(token: &str, line: usize, what: &str) -> KnapsackResult<u64> {
    token.parse().map_err(|_| KnapsackError::Parse {
        line,
        message: format!("invalid {what} '{token}'"),
    })
}

fn expect_end(extra: Option<&str>, line: usize) -> KnapsackResult<()> {
    match extra {
        None => Ok(()),
        Some(token) => Err(KnapsackError::Parse {
            line,
            message: format!("unexpected trailing field '{token}'"),
        }),
    }
}
