//! Desired-network-state to RouterOS script compilation.
//!
//! This library is a pure, deterministic compiler: one immutable
//! [`state::DesiredState`] value goes in, one ordered RouterOS configuration
//! script comes out. It never talks to a device, persists nothing, and does
//! no I/O; the hosting application (a wizard UI or the bundled CLI) owns
//! reading state documents and delivering the produced text.
//!
//! # Architecture
//!
//! - [`validate`] — single-value guards (VLAN id range, MAC syntax)
//! - [`gen`] — one pure generator per feature domain (WAN links, DHCP
//!   client, VLANs, IPIP/EoIP/GRE/VXLAN tunnels, DNS policy routing,
//!   automation scripts, hardening baseline), each mapping a narrow slice
//!   of the desired state to a [`script_doc_core::ScriptDocument`] fragment
//! - [`sort`] — stable priority sort for packet-marking and firewall rules
//! - [`compile`] — orchestration: generators → append-only merge → targeted
//!   sort → rendered text plus the fixed restart trailer
//! - [`error`] — the validation / business-rule / structural error taxonomy
//!
//! Fragments are merged append-only in generator order, so section order and
//! intra-section command order are fully determined by the input; identical
//! states always compile to byte-identical text.
//!
//! # Built on script-doc-core
//!
//! The ordered section/command document model, merging and rendering live in
//! `script-doc-core`. Everything RouterOS-specific is in this crate.

pub mod compile;
pub mod error;
pub mod gen;
pub mod section;
pub mod sort;
pub mod state;
pub mod validate;
