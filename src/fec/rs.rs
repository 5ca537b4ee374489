//! Systematic Reed-Solomon encoder over GF(2^8).
//!
//! Fixed parameters required for interoperability: primitive polynomial
//! 0x11D, generator alpha=2, first consecutive root (fcr) = 0. No decoder
//! lives in this crate; the host reconstructs (see spec Non-goals).

use crate::constants::RS_MAX_PARITY;
use crate::error::FecError;
use crate::fec::gf::GfTable;

/// A systematic RS encoder for a fixed parity count `nsym`.
///
/// The generator polynomial is built once at construction and reused for
/// every message encoded at this `nsym` — one instance is built per file,
/// per spec (the sender builds it once per file at degree `M`).
#[derive(Debug, Clone)]
pub struct RsEncoder {
    nsym: usize,
    /// Generator polynomial coefficients, `gen[0..=nsym]`.
    gen: Vec<u8>,
}

impl RsEncoder {
    /// Builds the generator polynomial of degree `nsym` against `gf`.
    ///
    /// `nsym` must be in `1..=127` (spec's `M <= 127` bound).
    pub fn new(nsym: u8, gf: &GfTable) -> Result<Self, FecError> {
        if nsym == 0 || nsym > RS_MAX_PARITY {
            return Err(FecError::InvalidNsym(nsym as u32));
        }
        let nsym = nsym as usize;
        let mut gen = vec![0u8; nsym + 1];
        gen[0] = 1;

        for i in 0..nsym {
            let root = gf.exp_at(i as i32);
            gen[i + 1] = gf.mul(gen[i], root);
            for j in (1..=i).rev() {
                gen[j] = gen[j - 1] ^ gf.mul(gen[j], root);
            }
            gen[0] = gf.mul(gen[0], root);
        }

        Ok(RsEncoder { nsym, gen })
    }

    /// Number of parity symbols this encoder produces.
    pub fn nsym(&self) -> usize {
        self.nsym
    }

    /// Encodes `msg`, returning a freshly allocated parity buffer of length
    /// `nsym`. The codeword is `msg || parity`.
    pub fn encode(&self, msg: &[u8], gf: &GfTable) -> Vec<u8> {
        let mut parity = vec![0u8; self.nsym];
        self.encode_into(msg, gf, &mut parity);
        parity
    }

    /// Allocation-free variant of [`Self::encode`]; `parity.len()` must
    /// equal `self.nsym()`.
    pub fn encode_into(&self, msg: &[u8], gf: &GfTable, parity: &mut [u8]) {
        debug_assert_eq!(parity.len(), self.nsym);
        for b in parity.iter_mut() {
            *b = 0;
        }

        for &byte in msg {
            let feedback = byte ^ parity[0];
            parity.copy_within(1.., 0);
            let last = parity.len() - 1;
            parity[last] = 0;
            if feedback != 0 {
                for j in 0..self.nsym {
                    parity[j] ^= gf.mul(self.gen[j + 1], feedback);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fec::gf::GfTable;

    fn eval_codeword_at_root(codeword: &[u8], i: usize, gf: &GfTable) -> u8 {
        // Horner evaluation of the codeword polynomial at alpha^i, treating
        // codeword[0] as the highest-degree coefficient (systematic msg||parity).
        let root = gf.exp_at(i as i32);
        let mut acc = 0u8;
        for &c in codeword {
            acc = gf.mul(acc, root) ^ c;
        }
        acc
    }

    #[test]
    fn systematic_codeword_is_multiple_of_generator() {
        let gf = GfTable::new();
        let nsym = 6u8;
        let enc = RsEncoder::new(nsym, &gf).unwrap();
        let msg = b"HELLO WORLD FROM LORETT";
        let parity = enc.encode(msg, &gf);
        let mut codeword = msg.to_vec();
        codeword.extend_from_slice(&parity);

        for i in 0..nsym as usize {
            assert_eq!(eval_codeword_at_root(&codeword, i, &gf), 0);
        }
    }

    #[test]
    fn single_byte_message_parity() {
        // Scenario 1 from the spec: 1-byte message, nsym=1.
        let gf = GfTable::new();
        let enc = RsEncoder::new(1, &gf).unwrap();
        let parity = enc.encode(&[0xAB], &gf);
        assert_eq!(parity.len(), 1);
        // feedback = msg[0] ^ parity[0](=0) = 0xAB; parity[0] = gen[1]*0xAB
        let expected = gf.mul(enc.gen[1], 0xAB);
        assert_eq!(parity[0], expected);
    }

    #[test]
    fn rejects_out_of_range_nsym() {
        let gf = GfTable::new();
        assert!(RsEncoder::new(0, &gf).is_err());
        assert!(RsEncoder::new(128, &gf).is_err());
        assert!(RsEncoder::new(127, &gf).is_ok());
    }
}
