//! Supplementary whitespace-tokenized readers for the rig's companion
//! files: an `OFF` triangle mesh and a dense per-vertex weight table. Both
//! are flat formats with no hierarchy and no interpolation; skinning the
//! mesh against the rig is left to consumers.

use crate::Error;
use glam::Vec3;
use log::debug;
use std::path::Path;
use std::str::FromStr;

/// Coordinate divisor applied to every mesh vertex on load.
const MESH_SCALE: f32 = 100.0;

/// Column count of one weight-table row: a leading vertex index plus one
/// weight per rig joint.
const WEIGHT_COLUMNS: usize = 32;

/// Triangle mesh read from an `OFF` file.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Mesh {
    pub vertices: Vec<Vec3>,
    pub faces: Vec<[u32; 3]>,
}

impl Mesh {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, Error> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::parse(&text)
    }

    pub fn parse(input: &str) -> Result<Self, Error> {
        let mut tokens = input.split_whitespace();

        let header = next_token(&mut tokens, "header")?;
        if header != "OFF" {
            return Err(Error::MeshParse {
                message: format!("expected OFF header, found \"{header}\""),
            });
        }

        let vertex_count: usize = number(next_token(&mut tokens, "vertex count")?)?;
        let face_count: usize = number(next_token(&mut tokens, "face count")?)?;
        // Edge count is declared by the format but unused.
        next_token(&mut tokens, "edge count")?;

        let mut vertices = Vec::with_capacity(vertex_count);
        for _ in 0..vertex_count {
            let x: f32 = number(next_token(&mut tokens, "vertex coordinate")?)?;
            let y: f32 = number(next_token(&mut tokens, "vertex coordinate")?)?;
            let z: f32 = number(next_token(&mut tokens, "vertex coordinate")?)?;
            vertices.push(Vec3::new(x, y, z) / MESH_SCALE);
        }

        let mut faces = Vec::with_capacity(face_count);
        for _ in 0..face_count {
            let arity = next_token(&mut tokens, "face size")?;
            if arity != "3" {
                return Err(Error::MeshParse {
                    message: format!("face size {arity} is not a triangle"),
                });
            }
            let i: u32 = number(next_token(&mut tokens, "face index")?)?;
            let j: u32 = number(next_token(&mut tokens, "face index")?)?;
            let k: u32 = number(next_token(&mut tokens, "face index")?)?;
            faces.push([i, j, k]);
        }

        debug!("parsed mesh: {} vertices, {} faces", vertices.len(), faces.len());
        Ok(Self { vertices, faces })
    }
}

/// One nonzero skinning influence on a vertex.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct VertexWeight {
    pub joint: usize,
    pub weight: f32,
}

pub fn load_weights(
    path: impl AsRef<Path>,
    vertex_count: usize,
) -> Result<Vec<Vec<VertexWeight>>, Error> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path).map_err(|source| Error::Io {
        path: path.display().to_string(),
        source,
    })?;
    parse_weights(&text, vertex_count)
}

/// Reads `vertex_count` rows of the dense weight table, dropping zero
/// weights. Each row leads with the vertex's own index (ignored) followed by
/// one weight per joint column; the table's single header row is skipped.
pub fn parse_weights(input: &str, vertex_count: usize) -> Result<Vec<Vec<VertexWeight>>, Error> {
    let mut tokens = input.split_whitespace();

    for _ in 0..WEIGHT_COLUMNS {
        next_token(&mut tokens, "header column")?;
    }

    let mut out = Vec::with_capacity(vertex_count);
    for _ in 0..vertex_count {
        next_token(&mut tokens, "vertex index")?;

        let mut weights = Vec::new();
        for joint in 0..WEIGHT_COLUMNS - 1 {
            let weight: f32 = number(next_token(&mut tokens, "weight")?)?;
            if weight != 0.0 {
                weights.push(VertexWeight { joint, weight });
            }
        }
        out.push(weights);
    }

    Ok(out)
}

fn next_token<'a>(
    tokens: &mut impl Iterator<Item = &'a str>,
    what: &str,
) -> Result<&'a str, Error> {
    tokens.next().ok_or_else(|| Error::MeshParse {
        message: format!("unexpected end of file reading {what}"),
    })
}

fn number<T: FromStr>(token: &str) -> Result<T, Error> {
    token.parse().map_err(|_| Error::MeshParse {
        message: format!("invalid number \"{token}\""),
    })
}
