use {crate::is_prime, derive_more::Display};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum Primality {
    #[display("prime")]
    Prime,
    #[display("not prime")]
    NotPrime,
}

impl From<bool> for Primality {
    fn from(prime: bool) -> Self {
        if prime {
            Primality::Prime
        } else {
            Primality::NotPrime
        }
    }
}

/// The result line for a single number, e.g. `13 is prime.`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[display("{n} is {primality}.")]
pub struct Verdict {
    pub n: i64,
    pub primality: Primality,
}

impl Verdict {
    pub fn of(n: i64) -> Self {
        Verdict {
            n,
            primality: is_prime(n).into(),
        }
    }

    pub fn is_prime(&self) -> bool {
        self.primality == Primality::Prime
    }
}

#[cfg(test)]
mod tests {
    use {super::*, rstest::rstest};

    #[rstest]
    #[case(13, "13 is prime.")]
    #[case(12, "12 is not prime.")]
    #[case(-7, "-7 is not prime.")]
    #[case(0, "0 is not prime.")]
    fn display(#[case] n: i64, #[case] expected: &str) {
        assert_eq!(Verdict::of(n).to_string(), expected);
    }

    #[test]
    fn follows_is_prime() {
        for n in -10..200 {
            assert_eq!(Verdict::of(n).is_prime(), is_prime(n));
        }
    }
}
