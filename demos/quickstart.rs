use nanotai::{DateSystem, Instant, Timescale, TimeResult};

fn main() -> TimeResult<()> {
    let now = Instant::now()?;

    println!("UTC:      {}", now.to_iso_string(Timescale::UTC)?);
    println!("TAI:      {}", now.to_iso_string(Timescale::TAI)?);
    println!("TT:       {}", now.to_iso_string(Timescale::TT)?);
    println!("MJD(UTC): {}", now.get(DateSystem::MJD, Timescale::UTC)?);
    println!("JD(TT):   {}", now.get(DateSystem::JD, Timescale::TT)?);
    println!("Epoch:    J{:.6}", now.get(DateSystem::Epoch, Timescale::TT)?);
    Ok(())
}
