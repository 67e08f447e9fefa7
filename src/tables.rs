//! Static letter code tables.
//!
//! The tables follow the letter codes accepted by the FASTA format
//! (NCBI BLAST documentation). Each code maps to a short description.
//! Nucleotide and amino acid codes are kept apart, and both alphabets are
//! split into *standard* and *degenerate* codes.
//!
//! Note that the complement table is not an involution:
//! `U` (uridine) complements to `A`, which in turn complements to `T`.

use crate::letter::SeqType;

/// A letter code table: `(symbol, description)` pairs.
pub type Table = &'static [(char, &'static str)];

pub static NUCLEOTIDE_STANDARD: Table = &[
    ('A', "adenosine"),
    ('C', "cytidine"),
    ('G', "guanine"),
    ('T', "thymidine"),
    ('N', "any (A/G/C/T)"),
    ('U', "uridine"),
];

pub static NUCLEOTIDE_DEGENERATE: Table = &[
    ('K', "keto (G/T)"),
    ('S', "strong (G/C)"),
    ('Y', "pyrimidine (T/C)"),
    ('M', "amino (A/C)"),
    ('W', "weak (A/T)"),
    ('R', "purine (G/A)"),
    ('B', "G/T/C"),
    ('D', "G/A/T"),
    ('H', "A/C/T"),
    ('V', "G/C/A"),
    ('-', "gap of indeterminate length"),
];

pub static AMINOACID_STANDARD: Table = &[
    ('A', "alanine"),
    ('B', "aspartate/asparagine"),
    ('C', "cystine"),
    ('D', "aspartate"),
    ('E', "glutamate"),
    ('F', "phenylalanine"),
    ('G', "glycine"),
    ('H', "histidine"),
    ('I', "isoleucine"),
    ('K', "lysine"),
    ('L', "leucine"),
    ('M', "methionine"),
    ('N', "asparagine"),
    ('P', "proline"),
    ('Q', "glutamine"),
    ('R', "arginine"),
    ('S', "serine"),
    ('T', "threonine"),
    ('U', "selenocysteine"),
    ('V', "valine"),
    ('W', "tryptophan"),
    ('Y', "tyrosine"),
    ('Z', "glutamate/glutamine"),
    ('X', "any"),
    ('*', "translation stop"),
];

pub static AMINOACID_DEGENERATE: Table = &[('-', "gap of indeterminate length")];

/// Base pairing partners of all nucleotide codes, gap included.
pub static NUCLEOTIDE_COMPLEMENT: &[(char, char)] = &[
    ('A', 'T'),
    ('C', 'G'),
    ('G', 'C'),
    ('T', 'A'),
    ('N', 'N'),
    ('U', 'A'),
    ('K', 'M'),
    ('S', 'S'),
    ('Y', 'R'),
    ('M', 'K'),
    ('W', 'W'),
    ('R', 'Y'),
    ('B', 'V'),
    ('D', 'H'),
    ('H', 'D'),
    ('V', 'B'),
    ('-', '-'),
];

#[inline]
fn find(table: Table, symbol: char) -> Option<&'static str> {
    table
        .iter()
        .find(|(s, _)| *s == symbol)
        .map(|(_, desc)| *desc)
}

/// Returns the `(standard, degenerate)` tables of a sequence type,
/// or `None` for `SeqType::Unknown`.
#[inline]
pub fn tables_for(seq_type: SeqType) -> Option<(Table, Table)> {
    match seq_type {
        SeqType::Nucleotide => Some((NUCLEOTIDE_STANDARD, NUCLEOTIDE_DEGENERATE)),
        SeqType::AminoAcid => Some((AMINOACID_STANDARD, AMINOACID_DEGENERATE)),
        SeqType::Unknown => None,
    }
}

/// Looks up an (upper case) symbol in the tables of the given sequence type.
/// Returns the description and whether the code is degenerate.
pub fn lookup(seq_type: SeqType, symbol: char) -> Option<(&'static str, bool)> {
    let (standard, degenerate) = tables_for(seq_type)?;
    if let Some(desc) = find(standard, symbol) {
        return Some((desc, false));
    }
    find(degenerate, symbol).map(|desc| (desc, true))
}

/// Returns the complement of a nucleotide code.
#[inline]
pub fn complement(symbol: char) -> Option<char> {
    NUCLEOTIDE_COMPLEMENT
        .iter()
        .find(|(s, _)| *s == symbol)
        .map(|(_, c)| *c)
}

/// Is the symbol present in any of the tables?
#[inline]
pub fn is_known(symbol: char) -> bool {
    is_nucleotide(symbol) || is_aminoacid(symbol)
}

#[inline]
pub fn is_nucleotide(symbol: char) -> bool {
    lookup(SeqType::Nucleotide, symbol).is_some()
}

#[inline]
pub fn is_aminoacid(symbol: char) -> bool {
    lookup(SeqType::AminoAcid, symbol).is_some()
}

/// Symbols that can only stand for amino acids. There is no such set for
/// nucleotides, every nucleotide code is also a valid amino acid code.
#[inline]
pub fn is_aminoacid_only(symbol: char) -> bool {
    is_aminoacid(symbol) && !is_nucleotide(symbol)
}
