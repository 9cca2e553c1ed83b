use anyhow::bail;
use colored::*;
use pregame_common::config::Config;
use pregame_common::network::mac::HardwareAddress;
use pregame_common::network::oui::Oui;
use pregame_core::generator;
use rand::Rng;

use crate::terminal::{colors, print};

/// Generates `count` addresses, on `prefix` if given or on random GOOD prefixes otherwise.
pub fn generate(prefix: Option<Oui>, count: usize, cfg: &Config) -> anyhow::Result<()> {
    if count == 0 {
        bail!("count must be at least 1");
    }

    let addresses = generate_many(prefix, count, &cfg.good_ouis, &mut rand::rng())?;

    print::header("generated addresses", cfg.quiet);
    for address in addresses {
        print::print_status(address.to_string().color(colors::MAC_ADDR).to_string());
    }
    Ok(())
}

fn generate_many<R: Rng + ?Sized>(
    prefix: Option<Oui>,
    count: usize,
    good: &[Oui],
    rng: &mut R,
) -> anyhow::Result<Vec<HardwareAddress>> {
    (0..count)
        .map(|_| match prefix {
            Some(prefix) => Ok(generator::generate(prefix, rng)),
            None => Ok(generator::generate_good(good, rng)?),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn fixed_prefix_is_kept() {
        let prefix: Oui = "aa:bb:cc".parse().unwrap();
        let mut rng = StdRng::seed_from_u64(7);

        let addresses = generate_many(Some(prefix), 5, &[], &mut rng).unwrap();
        assert_eq!(addresses.len(), 5);
        assert!(addresses.iter().all(|address| address.oui() == prefix));
    }

    #[test]
    fn random_prefixes_come_from_the_good_list() {
        let good: Vec<Oui> = ["64:1b:2f", "9c:73:b1"].iter().map(|s| s.parse().unwrap()).collect();
        let mut rng = StdRng::seed_from_u64(7);

        let addresses = generate_many(None, 20, &good, &mut rng).unwrap();
        assert!(addresses.iter().all(|address| good.contains(&address.oui())));
    }

    #[test]
    fn empty_good_list_is_an_error() {
        let mut rng = StdRng::seed_from_u64(7);
        assert!(generate_many(None, 1, &[], &mut rng).is_err());
    }
}
