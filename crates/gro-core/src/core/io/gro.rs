use crate::core::io::traits::CoordinateFile;
use crate::core::models::atom::AtomRecord;
use crate::core::models::system::GroSystem;
use nalgebra::{Point3, Vector3};
use std::io::{self, BufRead, Write};
use thiserror::Error;
use tracing::{debug, trace, warn};

#[derive(Debug, Error)]
pub enum GroError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("Parse error on line {line}: {kind}")]
    Parse {
        line: usize,
        kind: GroParseErrorKind,
    },
    #[error("File ended after {found} of {expected} atom lines")]
    Truncated { expected: usize, found: usize },
    #[error("Missing required record: {0}")]
    MissingRecord(String),
    #[error("Cannot write line {line}: {field} '{value}' is wider than 5 columns")]
    FieldTooWide {
        line: usize,
        field: &'static str,
        value: String,
    },
    #[error("Cannot write a title that spans several lines")]
    MultiLineTitle,
}

#[derive(Debug, Error)]
pub enum GroParseErrorKind {
    #[error("Invalid atom count (value: '{value}')")]
    InvalidAtomCount { value: String },
    #[error("Invalid integer format in columns {columns} (value: '{value}')")]
    InvalidInt { columns: String, value: String },
    #[error("Invalid float format in columns {columns} (value: '{value}')")]
    InvalidFloat { columns: String, value: String },
    #[error("Columns {columns} split a multi-byte character")]
    NonAsciiColumn { columns: String },
    #[error("Invalid box vector component '{value}'")]
    InvalidBoxComponent { value: String },
}

/// A 0-based, end-exclusive byte range of an atom line.
#[derive(Debug, Clone, Copy)]
struct Column {
    start: usize,
    end: usize,
}

impl Column {
    const fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    fn label(self) -> String {
        format!("{}-{}", self.start + 1, self.end)
    }
}

const RESIDUE_ID: Column = Column::new(0, 5);
const RESIDUE_NAME: Column = Column::new(5, 10);
const ATOM_NAME: Column = Column::new(10, 15);
const ATOM_ID: Column = Column::new(15, 20);
const POSITION: [Column; 3] = [Column::new(20, 28), Column::new(28, 36), Column::new(36, 44)];
const VELOCITY: [Column; 3] = [Column::new(44, 52), Column::new(52, 60), Column::new(60, 68)];

/// Atom lines longer than this carry velocity columns.
const POSITION_ONLY_WIDTH: usize = 44;

/// Number of box components written back on encode.
const WRITTEN_BOX_COMPONENTS: usize = 3;

/// Width of the id and name columns.
const FIELD_WIDTH: usize = 5;

/// Ids wrap at five digits on write, as GROMACS does.
const ID_MODULUS: isize = 100_000;

/// Returns the text of `column` in `line`, clamped to the end of the line.
fn slice(line: &str, column: Column, line_num: usize) -> Result<&str, GroError> {
    let end = column.end.min(line.len());
    if column.start >= end {
        return Ok("");
    }
    line.get(column.start..end).ok_or_else(|| GroError::Parse {
        line: line_num,
        kind: GroParseErrorKind::NonAsciiColumn {
            columns: column.label(),
        },
    })
}

fn parse_int(line: &str, column: Column, line_num: usize) -> Result<isize, GroError> {
    let value = slice(line, column, line_num)?.trim();
    value.parse().map_err(|_| GroError::Parse {
        line: line_num,
        kind: GroParseErrorKind::InvalidInt {
            columns: column.label(),
            value: value.into(),
        },
    })
}

fn parse_float(line: &str, column: Column, line_num: usize) -> Result<f64, GroError> {
    let value = slice(line, column, line_num)?.trim();
    value.parse().map_err(|_| GroError::Parse {
        line: line_num,
        kind: GroParseErrorKind::InvalidFloat {
            columns: column.label(),
            value: value.into(),
        },
    })
}

fn parse_triple(line: &str, columns: &[Column; 3], line_num: usize) -> Result<[f64; 3], GroError> {
    Ok([
        parse_float(line, columns[0], line_num)?,
        parse_float(line, columns[1], line_num)?,
        parse_float(line, columns[2], line_num)?,
    ])
}

fn parse_atom_line(line: &str, line_num: usize) -> Result<AtomRecord, GroError> {
    let residue_id = parse_int(line, RESIDUE_ID, line_num)?;
    let residue_name = slice(line, RESIDUE_NAME, line_num)?.trim();
    let atom_name = slice(line, ATOM_NAME, line_num)?.trim();
    let atom_id = parse_int(line, ATOM_ID, line_num)?;
    let [x, y, z] = parse_triple(line, &POSITION, line_num)?;

    let velocity = if line.len() > POSITION_ONLY_WIDTH {
        let [vx, vy, vz] = parse_triple(line, &VELOCITY, line_num)?;
        Vector3::new(vx, vy, vz)
    } else {
        Vector3::zeros()
    };

    Ok(
        AtomRecord::new(residue_id, residue_name, atom_name, atom_id, Point3::new(x, y, z))
            .with_velocity(velocity),
    )
}

fn parse_box_line(line: &str, line_num: usize) -> Result<Vec<f64>, GroError> {
    line.split_whitespace()
        .map(|token| {
            token.parse::<f64>().map_err(|_| GroError::Parse {
                line: line_num,
                kind: GroParseErrorKind::InvalidBoxComponent {
                    value: token.into(),
                },
            })
        })
        .collect()
}

fn wrap_id(id: isize) -> isize {
    id % ID_MODULUS
}

/// Checks that every fixed-width field of `atom` fits its column.
fn check_atom_fits(atom: &AtomRecord, line_num: usize) -> Result<(), GroError> {
    let fields = [
        ("residue number", wrap_id(atom.residue_id).to_string()),
        ("residue name", atom.residue_name.clone()),
        ("atom name", atom.atom_name.clone()),
        ("atom number", wrap_id(atom.atom_id).to_string()),
    ];
    for (field, value) in fields {
        if value.len() > FIELD_WIDTH {
            return Err(GroError::FieldTooWide {
                line: line_num,
                field,
                value,
            });
        }
    }
    Ok(())
}

fn format_atom_line(atom: &AtomRecord) -> String {
    format!(
        "{:>5}{:<5}{:>5}{:>5}{:>8.3}{:>8.3}{:>8.3}{:>8.4}{:>8.4}{:>8.4}",
        wrap_id(atom.residue_id),
        atom.residue_name,
        atom.atom_name,
        wrap_id(atom.atom_id),
        atom.position.x,
        atom.position.y,
        atom.position.z,
        atom.velocity.x,
        atom.velocity.y,
        atom.velocity.z,
    )
}

fn format_box_line(components: &[f64]) -> String {
    if components.len() > WRITTEN_BOX_COMPONENTS {
        warn!(
            stored = components.len(),
            "Only the first three box components are written; the rest are dropped."
        );
    } else if components.len() < WRITTEN_BOX_COMPONENTS {
        warn!(
            stored = components.len(),
            "Box vector has fewer than three components; padding with zeros."
        );
    }

    (0..WRITTEN_BOX_COMPONENTS)
        .map(|i| format!("{:>10.5}", components.get(i).copied().unwrap_or(0.0)))
        .collect()
}

/// The fixed-width GROMACS `.gro` codec.
///
/// Layout, by 0-based byte columns: residue number `[0,5)`, residue name `[5,10)`,
/// atom name `[10,15)`, atom number `[15,20)`, position `[20,44)` in three 8-wide
/// fields, and optionally velocity `[44,68)` in three 8-wide fields.
pub struct GroFile;

impl GroFile {
    /// Decodes a system from `.gro` text.
    pub fn decode_str(text: &str) -> Result<GroSystem, GroError> {
        let mut bytes = text.as_bytes();
        Self::read_from(&mut bytes)
    }

    /// Encodes a system as `.gro` text.
    pub fn encode_string(system: &GroSystem) -> Result<String, GroError> {
        let mut buffer = Vec::new();
        Self::write_to(system, &mut buffer)?;
        String::from_utf8(buffer)
            .map_err(|e| GroError::Io(io::Error::new(io::ErrorKind::InvalidData, e)))
    }
}

impl CoordinateFile for GroFile {
    type Error = GroError;

    fn read_from(reader: &mut impl BufRead) -> Result<GroSystem, Self::Error> {
        let mut lines = reader.lines();

        let title = lines
            .next()
            .transpose()?
            .ok_or_else(|| GroError::MissingRecord("title line".into()))?;
        let count_line = lines
            .next()
            .transpose()?
            .ok_or_else(|| GroError::MissingRecord("atom count line".into()))?;
        let expected: usize = count_line.trim().parse().map_err(|_| GroError::Parse {
            line: 2,
            kind: GroParseErrorKind::InvalidAtomCount {
                value: count_line.trim().into(),
            },
        })?;
        debug!(title = %title, atoms = expected, "Reading .gro header.");

        let mut system = GroSystem::with_title(&title);
        for found in 0..expected {
            let line_num = found + 3;
            let line = match lines.next() {
                Some(line) => line?,
                None => return Err(GroError::Truncated { expected, found }),
            };
            let atom = parse_atom_line(&line, line_num)?;
            trace!(line = line_num, atom = %atom.atom_name, "Parsed atom line.");
            system.push_atom(atom);
        }

        let box_line_num = expected + 3;
        match lines.next().transpose()? {
            Some(line) if !line.trim().is_empty() => {
                system.set_box_vector(parse_box_line(&line, box_line_num)?);
            }
            _ => debug!("No box vector line; keeping the default box."),
        }

        if lines.next().is_some() {
            debug!("Ignoring lines after the box vector.");
        }

        Ok(system)
    }

    /// Writes the system in `.gro` layout.
    ///
    /// Ids are written modulo 100000. The title and every record are checked before
    /// anything is written, so a system that does not fit the columns produces no
    /// output at all.
    fn write_to(system: &GroSystem, writer: &mut impl Write) -> Result<(), Self::Error> {
        if system.title().contains(['\n', '\r']) {
            return Err(GroError::MultiLineTitle);
        }
        for (index, atom) in system.atoms().iter().enumerate() {
            check_atom_fits(atom, index + 3)?;
        }

        writeln!(writer, "{}", system.title())?;
        writeln!(writer, " {}", system.atom_count())?;
        for atom in system.atoms() {
            writeln!(writer, "{}", format_atom_line(atom))?;
        }
        writeln!(writer, "{}", format_box_line(system.box_vector()))?;
        Ok(())
    }
}
