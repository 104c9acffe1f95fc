use colored::*;
use portdrift_common::network::services;

use crate::terminal::colors;

type Detail = (&'static str, ColoredString);

/// How a port compares with the stored baseline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PortStatus {
    New,
    Known,
}

pub fn port_heading(port: u16) -> ColoredString {
    format!("{port}/tcp").color(colors::PORT_NUMBER).bold()
}

pub fn port_details(port: u16, status: PortStatus) -> Vec<Detail> {
    let service: ColoredString = match services::service_name(port) {
        services::UNKNOWN_SERVICE => services::UNKNOWN_SERVICE.dimmed(),
        name => name.color(colors::SECONDARY),
    };
    let drift: ColoredString = match status {
        PortStatus::New => "new since baseline".color(colors::PORT_NEW).bold(),
        PortStatus::Known => "in baseline".color(colors::PORT_KNOWN),
    };

    vec![("Service", service), ("Drift", drift)]
}

pub fn label_list(labels: &[String], color: Color) -> ColoredString {
    labels.join(", ").color(color)
}
