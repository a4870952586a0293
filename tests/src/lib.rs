#[cfg(test)]
mod util;
#[cfg(test)]
mod wake;
