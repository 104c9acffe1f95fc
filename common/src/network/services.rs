//! Well-known TCP service names.
//!
//! A static lookup used to label open ports in reports and baselines. The
//! label format (`"22 (SSH)"`) is what gets persisted, so changing a name here
//! shows up as drift on the next run.

pub const UNKNOWN_SERVICE: &str = "Unknown";

/// Common TCP ports and their services, sorted by port.
const KNOWN_SERVICES: &[(u16, &str)] = &[
    (20, "FTP Data"),
    (21, "FTP Control"),
    (22, "SSH"),
    (23, "Telnet"),
    (25, "SMTP"),
    (53, "DNS"),
    (67, "DHCP"),
    (68, "DHCP"),
    (80, "HTTP"),
    (110, "POP3"),
    (111, "RPC"),
    (123, "NTP"),
    (135, "RPC"),
    (143, "IMAP"),
    (161, "SNMP"),
    (162, "SNMP Trap"),
    (194, "IRC"),
    (443, "HTTPS"),
    (445, "SMB"),
    (465, "SMTPS"),
    (587, "SMTP (submission)"),
    (993, "IMAPS"),
    (995, "POP3S"),
    (3306, "MySQL"),
    (3389, "RDP"),
    (5432, "PostgreSQL"),
    (5900, "VNC"),
    (6379, "Redis"),
    (8080, "HTTP-Alt"),
];

pub fn known() -> &'static [(u16, &'static str)] {
    KNOWN_SERVICES
}

/// Returns the service usually bound to `port`, or [`UNKNOWN_SERVICE`].
pub fn service_name(port: u16) -> &'static str {
    KNOWN_SERVICES
        .binary_search_by_key(&port, |(p, _)| *p)
        .map(|idx| KNOWN_SERVICES[idx].1)
        .unwrap_or(UNKNOWN_SERVICE)
}

/// Formats a port as a baseline label, e.g. `"443 (HTTPS)"`.
pub fn label(port: u16) -> String {
    format!("{port} ({})", service_name(port))
}

pub fn labels(ports: &[u16]) -> Vec<String> {
    ports.iter().copied().map(label).collect()
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ssh_is_known() {
        assert_eq!(service_name(22), "SSH");
    }

    #[test]
    fn unlisted_port_is_unknown() {
        assert_eq!(service_name(31337), "Unknown");
        assert_eq!(label(31337), "31337 (Unknown)");
    }

    #[test]
    fn duplicate_names_resolve_per_port() {
        assert_eq!(service_name(67), "DHCP");
        assert_eq!(service_name(68), "DHCP");
        assert_eq!(service_name(587), "SMTP (submission)");
    }

    #[test]
    fn table_is_sorted_for_binary_search() {
        assert!(known().windows(2).all(|pair| pair[0].0 < pair[1].0));
    }

    #[test]
    fn labels_keep_input_order() {
        assert_eq!(
            labels(&[22, 80, 8080]),
            vec!["22 (SSH)", "80 (HTTP)", "8080 (HTTP-Alt)"]
        );
    }
}
