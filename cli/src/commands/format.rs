use lanwake_common::network::mac::{FormatSpec, PhysicalAddress};

pub fn format(address: &PhysicalAddress, spec: FormatSpec) {
    println!("{}", address.to_text(spec));
}
