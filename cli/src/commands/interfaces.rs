use lanwake_common::error::WakeError;
use lanwake_common::network::endpoint::InterfaceBinding;
use lanwake_core::discovery;

use crate::commands::DiscoveryArgs;
use crate::terminal::print;

pub fn interfaces(args: &DiscoveryArgs) -> anyhow::Result<()> {
    let bindings: Vec<InterfaceBinding> = discovery::discover(&args.to_options());

    print::header("interfaces");

    if bindings.is_empty() {
        return Err(WakeError::NoInterfacesAvailable.into());
    }

    for (idx, binding) in bindings.iter().enumerate() {
        print::binding(idx, binding);
    }

    Ok(())
}
