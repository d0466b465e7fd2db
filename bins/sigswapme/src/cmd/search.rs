use super::{substitute::SubstitutionReport, Error};
use clap::Parser;
use rand::{rngs::StdRng, SeedableRng};
use sigswap::{find_recoverable_signature, parse, primitives::Bytes, substitute_and_recover};
use tracing::info;

/// `search` subcommand.
#[derive(Parser, Debug)]
pub struct Cmd {
    /// Hex encoded signed transaction.
    pub signed: Bytes,
    /// Maximum number of random signatures to try.
    #[arg(long, default_value_t = 256)]
    pub attempts: usize,
    /// Seed of the random generator, random if not set.
    #[arg(long)]
    pub seed: Option<u64>,
}

impl Cmd {
    /// Runs the `search` command.
    pub fn run(&self) -> Result<SubstitutionReport, Error> {
        let (tx, _) = parse(&self.signed)?;
        let mut rng = match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        let sig = find_recoverable_signature(&tx.signature_hash(), self.attempts, &mut rng)
            .ok_or(Error::SearchExhausted(self.attempts))?;
        info!(r = %sig.r, s = %sig.s, y_parity = sig.y_parity, "found recoverable signature");

        let substitution = substitute_and_recover(&self.signed, &sig)?;
        Ok(SubstitutionReport(substitution))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sigswap::{LocalSigner, Transaction, TxEip1559};

    fn signed() -> Bytes {
        let tx: Transaction = TxEip1559 {
            chain_id: 1,
            gas_limit: 21_000,
            ..Default::default()
        }
        .into();
        let signer = LocalSigner::from_slice(&[0x46; 32]).unwrap();
        tx.sign_with(&signer).unwrap().1
    }

    #[test]
    fn seeded_search() {
        let cmd = Cmd {
            signed: signed(),
            attempts: 128,
            seed: Some(7),
        };
        let first = cmd.run().unwrap();
        assert_eq!(cmd.run().unwrap(), first);
        assert_ne!(Some(first.0.substituted_signer), first.0.original_signer);
    }

    #[test]
    fn exhausted() {
        let cmd = Cmd {
            signed: signed(),
            attempts: 0,
            seed: Some(7),
        };
        assert!(matches!(cmd.run(), Err(Error::SearchExhausted(0))));
    }
}
