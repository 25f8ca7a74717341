use std::fmt;
use std::str::FromStr;

/// Builds `RecordType` together with its code and mnemonic tables from a
/// single list, so the three can never drift apart.
macro_rules! record_types {
    ( $( ($variant:ident => $code:literal, $mnemonic:literal) ),* $(,)? ) => {
        /// IANA-registered DNS RR TYPEs, including the query-only types.
        ///
        /// Registry: <https://www.iana.org/assignments/dns-parameters/dns-parameters.xhtml#dns-parameters-4>
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum RecordType {
            $( $variant, )*
        }

        impl RecordType {
            const ALL: &'static [RecordType] = &[ $( RecordType::$variant, )* ];

            pub fn as_str(&self) -> &'static str {
                match self {
                    $( RecordType::$variant => $mnemonic, )*
                }
            }

            pub fn to_u16(&self) -> u16 {
                match self {
                    $( RecordType::$variant => $code, )*
                }
            }

            pub fn from_u16(code: u16) -> Option<Self> {
                match code {
                    $( $code => Some(RecordType::$variant), )*
                    _ => None,
                }
            }

            fn from_mnemonic(s: &str) -> Option<Self> {
                $(
                    if s.eq_ignore_ascii_case($mnemonic) {
                        return Some(RecordType::$variant);
                    }
                )*
                None
            }
        }
    };
}

record_types! {
    (A => 1, "A"),
    (NS => 2, "NS"),
    (MD => 3, "MD"),
    (MF => 4, "MF"),
    (CNAME => 5, "CNAME"),
    (SOA => 6, "SOA"),
    (MB => 7, "MB"),
    (MG => 8, "MG"),
    (MR => 9, "MR"),
    (NULL => 10, "NULL"),
    (WKS => 11, "WKS"),
    (PTR => 12, "PTR"),
    (HINFO => 13, "HINFO"),
    (MINFO => 14, "MINFO"),
    (MX => 15, "MX"),
    (TXT => 16, "TXT"),
    (RP => 17, "RP"),
    (AFSDB => 18, "AFSDB"),
    (X25 => 19, "X25"),
    (ISDN => 20, "ISDN"),
    (RT => 21, "RT"),
    (NSAP => 22, "NSAP"),
    (NSAPPTR => 23, "NSAP-PTR"),
    (SIG => 24, "SIG"),
    (KEY => 25, "KEY"),
    (PX => 26, "PX"),
    (GPOS => 27, "GPOS"),
    (AAAA => 28, "AAAA"),
    (LOC => 29, "LOC"),
    (NXT => 30, "NXT"),
    (EID => 31, "EID"),
    (NIMLOC => 32, "NIMLOC"),
    (SRV => 33, "SRV"),
    (ATMA => 34, "ATMA"),
    (NAPTR => 35, "NAPTR"),
    (KX => 36, "KX"),
    (CERT => 37, "CERT"),
    (A6 => 38, "A6"),
    (DNAME => 39, "DNAME"),
    (SINK => 40, "SINK"),
    (OPT => 41, "OPT"),
    (APL => 42, "APL"),
    (DS => 43, "DS"),
    (SSHFP => 44, "SSHFP"),
    (IPSECKEY => 45, "IPSECKEY"),
    (RRSIG => 46, "RRSIG"),
    (NSEC => 47, "NSEC"),
    (DNSKEY => 48, "DNSKEY"),
    (DHCID => 49, "DHCID"),
    (NSEC3 => 50, "NSEC3"),
    (NSEC3PARAM => 51, "NSEC3PARAM"),
    (TLSA => 52, "TLSA"),
    (SMIMEA => 53, "SMIMEA"),
    (HIP => 55, "HIP"),
    (NINFO => 56, "NINFO"),
    (RKEY => 57, "RKEY"),
    (TALINK => 58, "TALINK"),
    (CDS => 59, "CDS"),
    (CDNSKEY => 60, "CDNSKEY"),
    (OPENPGPKEY => 61, "OPENPGPKEY"),
    (CSYNC => 62, "CSYNC"),
    (ZONEMD => 63, "ZONEMD"),
    (SVCB => 64, "SVCB"),
    (HTTPS => 65, "HTTPS"),
    (DSYNC => 66, "DSYNC"),
    (HHIT => 67, "HHIT"),
    (BRID => 68, "BRID"),
    (SPF => 99, "SPF"),
    (UINFO => 100, "UINFO"),
    (UID => 101, "UID"),
    (GID => 102, "GID"),
    (UNSPEC => 103, "UNSPEC"),
    (NID => 104, "NID"),
    (L32 => 105, "L32"),
    (L64 => 106, "L64"),
    (LP => 107, "LP"),
    (EUI48 => 108, "EUI48"),
    (EUI64 => 109, "EUI64"),
    (NXNAME => 128, "NXNAME"),
    (TKEY => 249, "TKEY"),
    (TSIG => 250, "TSIG"),
    (IXFR => 251, "IXFR"),
    (AXFR => 252, "AXFR"),
    (MAILB => 253, "MAILB"),
    (MAILA => 254, "MAILA"),
    (ANY => 255, "*"),
    (URI => 256, "URI"),
    (CAA => 257, "CAA"),
    (AVC => 258, "AVC"),
    (DOA => 259, "DOA"),
    (AMTRELAY => 260, "AMTRELAY"),
    (RESINFO => 261, "RESINFO"),
    (WALLET => 262, "WALLET"),
    (CLA => 263, "CLA"),
    (IPN => 264, "IPN"),
    (TA => 32768, "TA"),
    (DLV => 32769, "DLV"),
}

impl RecordType {
    /// Every registered type, in ascending code order.
    pub fn all() -> &'static [RecordType] {
        Self::ALL
    }
}

impl fmt::Display for RecordType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for RecordType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_mnemonic(s).ok_or_else(|| format!("Unknown record type: {}", s))
    }
}
