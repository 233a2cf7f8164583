//! Reading and writing graphs in a plain text format, optionally gzipped.
//!
//! A graph file starts with a header `n m` followed by `m` edges, one per line.
//! Blank lines and lines starting with `#` are skipped, anything after the
//! `m`-th edge is ignored:
//! ```text
//! # a path on three vertices
//! 3 2
//! 0 1
//! 1 2
//! ```
//! Vertices may be written 0-based or 1-based: if the largest index mentioned in the
//! file equals `n`, all indices are shifted down by one.
use std::ffi::OsStr;
use std::fs::File;
use std::io;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use flate2::Compression;
use flate2::read::GzDecoder;
use flate2::write::GzEncoder;
use thiserror::Error;

use crate::graph::*;
use crate::iterators::EdgeIterable;
use crate::simplegraph::SimpleGraph;

#[derive(Debug, Error)]
pub enum ParseError {
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error("input contains no graph")]
    Empty,
    #[error("line {line}: {reason}")]
    Format { line: usize, reason: String },
    #[error("line {line}: {source}")]
    Graph { line: usize, #[source] source: GraphError },
}

fn format_error(line:usize, reason:impl Into<String>) -> ParseError {
    ParseError::Format { line, reason: reason.into() }
}

pub trait WriteToFile {
    fn write_txt<P: AsRef<Path>>(&self, path:P) -> io::Result<()> {
        let file = File::create(path)?;
        self.write_buf(Box::new(BufWriter::new(file)))
    }

    fn write_gzipped<P: AsRef<Path>>(&self, path:P) -> io::Result<()> {
        let file = File::create(path)?;
        let gz = GzEncoder::new(file, Compression::default());
        self.write_buf(Box::new(BufWriter::new(gz)))
    }

    fn write_buf(&self, buf:Box<dyn Write>) -> io::Result<()>;
}

pub trait LoadFromFile {
    fn from_txt<P: AsRef<Path>>(path:P) -> Result<Self, ParseError> where Self: Sized {
        let file = File::open(path)?;
        Self::from_buf(Box::new(BufReader::new(file)))
    }

    fn from_gzipped<P: AsRef<Path>>(path:P) -> Result<Self, ParseError> where Self: Sized {
        let file = File::open(path)?;
        Self::from_buf(Box::new(BufReader::new(GzDecoder::new(file))))
    }

    /// Picks the decoder by extension: `.gz` files are decompressed, everything
    /// else is read as plain text.
    fn from_file<P: AsRef<Path>>(path:P) -> Result<Self, ParseError> where Self: Sized {
        let path = path.as_ref();
        match path.extension().and_then(OsStr::to_str) {
            Some("gz") => Self::from_gzipped(path),
            _ => Self::from_txt(path),
        }
    }

    fn from_buf(buf:Box<dyn BufRead>) -> Result<Self, ParseError> where Self: Sized;
}

impl LoadFromFile for SimpleGraph {
    fn from_buf(buf:Box<dyn BufRead>) -> Result<Self, ParseError> {
        let mut records = buf.lines()
            .enumerate()
            .filter_map(|(i, line)| match line {
                Ok(l) => {
                    let l = l.trim();
                    if l.is_empty() || l.starts_with('#') {
                        None
                    } else {
                        Some(Ok((i+1, l.to_string())))
                    }
                }
                Err(err) => Some(Err(err)),
            });

        let (lineno, header) = records.next().transpose()?.ok_or(ParseError::Empty)?;
        let (n, m) = parse_pair(&header, lineno)
            .map_err(|_| format_error(lineno, "header must consist of the two integers `n m`"))?;
        if n < 1 || m < 0 {
            return Err(format_error(lineno, format!("expected n >= 1 and m >= 0, got n = {n}, m = {m}")));
        }
        let n = u32::try_from(n)
            .map_err(|_| format_error(lineno, format!("vertex count {n} is too large")))?;

        let mut edges = Vec::new();
        let mut last = lineno;
        for i in 0..m {
            let (lineno, record) = records.next().transpose()?
                .ok_or_else(|| format_error(last, format!("expected {m} edges, found {i}")))?;
            edges.push((lineno, parse_pair(&record, lineno)?));
            last = lineno;
        }

        let max_index = edges.iter().map(|(_, (u, v))| (*u).max(*v)).max();
        let shift = if max_index == Some(n as i64) { 1 } else { 0 };

        let mut G = SimpleGraph::new(n).map_err(|source| ParseError::Graph { line: lineno, source })?;
        for (lineno, (u, v)) in edges {
            let u = normalize_index(u, shift, n, lineno)?;
            let v = normalize_index(v, shift, n, lineno)?;
            G.add_edge(&u, &v).map_err(|source| ParseError::Graph { line: lineno, source })?;
        }

        Ok(G)
    }
}

impl WriteToFile for SimpleGraph {
    fn write_buf(&self, mut buf:Box<dyn Write>) -> io::Result<()> {
        writeln!(buf, "{} {}", self.num_vertices(), self.num_edges())?;
        for (u, v) in self.edges() {
            writeln!(buf, "{u} {v}")?;
        }
        buf.flush()
    }
}

fn parse_pair(s:&str, lineno:usize) -> Result<(i64, i64), ParseError> {
    let tokens:Vec<&str> = s.split_whitespace().collect();
    if tokens.len() != 2 {
        return Err(format_error(lineno, format!("expected two integers, found `{s}`")));
    }
    Ok((parse_int(tokens[0], lineno)?, parse_int(tokens[1], lineno)?))
}

fn parse_int(s:&str, lineno:usize) -> Result<i64, ParseError> {
    s.parse::<i64>().map_err(|_| format_error(lineno, format!("cannot parse integer `{s}`")))
}

fn normalize_index(u:i64, shift:i64, n:u32, lineno:usize) -> Result<Vertex, ParseError> {
    let u0 = u - shift;
    if u0 < 0 || u0 >= n as i64 {
        return Err(format_error(lineno, format!("vertex {u} out of range after index normalization")));
    }
    Ok(u0 as Vertex)
}


//  #######
//     #    ######  ####  #####  ####
//     #    #      #        #   #
//     #    #####   ####    #    ####
//     #    #           #   #        #
//     #    #      #    #   #   #    #
//     #    ######  ####    #    ####

#[cfg(test)]
mod test {
    use super::*;
    use crate::classify::classify;
    use crate::predicates::GraphKind;

    use std::io::Cursor;

    fn parse(text:&str) -> Result<SimpleGraph, ParseError> {
        SimpleGraph::from_buf(Box::new(Cursor::new(text.to_string())))
    }

    #[test]
    fn zero_based() {
        let G = parse("4 4\n0 1\n1 2\n2 3\n3 0\n").unwrap();
        assert_eq!(G, SimpleGraph::cycle(4).unwrap());
    }

    #[test]
    fn one_based() {
        let G = parse("4 4\n1 2\n2 3\n3 4\n4 1\n").unwrap();
        assert_eq!(G, SimpleGraph::cycle(4).unwrap());

        let res = classify(&G);
        assert!(res.contains(&GraphKind::Cycle(4)));
        assert!(res.contains(&GraphKind::Bipartite));
    }

    #[test]
    fn comments_and_blank_lines() {
        let G = parse("# star\n\n3 2\n  # center is 0\n0 1\n\n0 2\n1 2\n").unwrap();
        assert_eq!(G.num_vertices(), 3);
        assert_eq!(G.num_edges(), 2);
        assert!(!G.adjacent(&1, &2));
    }

    #[test]
    fn isolated_vertices() {
        let G = parse("5 0\n").unwrap();
        assert_eq!(G.num_vertices(), 5);
        assert_eq!(G.num_edges(), 0);
    }

    #[test]
    fn out_of_range() {
        let err = parse("3 1\n0 5\n").unwrap_err();
        assert!(matches!(err, ParseError::Format { line: 2, .. }));

        let err = parse("3 1\n-1 2\n").unwrap_err();
        assert!(matches!(err, ParseError::Format { line: 2, .. }));
    }

    #[test]
    fn malformed() {
        assert!(matches!(parse(""), Err(ParseError::Empty)));
        assert!(matches!(parse("# nothing\n\n"), Err(ParseError::Empty)));
        assert!(matches!(parse("3\n"), Err(ParseError::Format { line: 1, .. })));
        assert!(matches!(parse("0 0\n"), Err(ParseError::Format { line: 1, .. })));
        assert!(matches!(parse("3 -1\n"), Err(ParseError::Format { line: 1, .. })));
        assert!(matches!(parse("3 2\n0 1\n"), Err(ParseError::Format { line: 2, .. })));
        assert!(matches!(parse("3 1\n0 x\n"), Err(ParseError::Format { line: 2, .. })));
        assert!(matches!(parse("3 1\n0 1 2\n"), Err(ParseError::Format { line: 2, .. })));
    }

    #[test]
    fn invalid_edges() {
        let err = parse("3 2\n0 1\n1 0\n").unwrap_err();
        assert!(matches!(err, ParseError::Graph { line: 3, source: GraphError::DuplicateEdge(1, 0) }));

        let err = parse("3 1\n2 2\n").unwrap_err();
        assert!(matches!(err, ParseError::Graph { line: 2, source: GraphError::InvalidArgument(_) }));
    }

    #[test]
    fn write_and_read() {
        let dir = tempfile::tempdir().unwrap();
        let txt = dir.path().join("graph.txt");
        let gz = dir.path().join("graph.txt.gz");

        let G = SimpleGraph::biclique(3, 3).unwrap();
        G.write_txt(&txt).unwrap();
        G.write_gzipped(&gz).unwrap();

        let H1 = SimpleGraph::from_txt(&txt).unwrap();
        let H2 = SimpleGraph::from_gzipped(&gz).unwrap();
        assert_eq!(G, H1);
        assert_eq!(H1, H2);

        assert_eq!(SimpleGraph::from_file(&txt).unwrap(), G);
        assert_eq!(SimpleGraph::from_file(&gz).unwrap(), G);
    }

    #[test]
    fn missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let res = SimpleGraph::from_file(dir.path().join("missing"));
        assert!(matches!(res, Err(ParseError::Io(_))));
    }
}
