//! Regenerates the golden vector files under `tests/data/`.
//!
//! For each exponent width this writes one decode file (all 256 bytes with
//! the value each decodes to) and one encode file (canonical values of
//! both signs, guard-bit probes beside every wide exponent, and the
//! specials), in the `binary-string,float-literal` record layout the
//! vector tests consume. Float literals are written in plain decimal;
//! records are parse-compatible with the committed files, which carry the
//! literals of the reference dataset.

use std::collections::BTreeSet;
use std::fs;
use std::io;
use std::path::Path;

use float8::core::f8::F8;

fn literal(v: f32) -> String {
    if v.is_nan() {
        "NaN".to_string()
    } else if v.is_infinite() {
        if v.is_sign_positive() { "inf" } else { "-inf" }.to_string()
    } else {
        format!("{v}")
    }
}

fn write_config<const E: u32>(dir: &Path) -> io::Result<()> {
    let f = 7 - E;
    let name = format!("1-{E}-{f}");
    let inf = F8::<E>::POS_INF.to_bits();

    let mut out = String::new();
    for byte in 0..=255u8 {
        let v = F8::<E>::from_bits(byte).to_f32();
        out.push_str(&format!("{byte:08b},{}\n", literal(v)));
    }
    fs::write(dir.join(format!("f8_to_f32_{name}.csv")), out)?;

    // Encode inputs: every canonical value of both signs, both guard-bit
    // sides of every wide exponent, and the specials.
    let mut inputs: Vec<u32> = Vec::new();
    for byte in 0..=inf {
        let w = F8::<E>::from_bits(byte).to_f32().to_bits();
        inputs.push(w);
        inputs.push(w | 0x8000_0000);
    }
    for e in 1u32..255 {
        for m in [1 << (22 - f), (1 << (22 - f)) - 1, 0x7F_FFFF] {
            inputs.push((e << 23) | m);
        }
    }
    inputs.extend([
        0x7FC0_0000, // quiet NaN
        0x7F80_0001, // signaling NaN
        0xFFC0_0000,
        0x7F80_0000,
        0xFF80_0000,
        0x0000_0001, // f32 subnormals
        0x807F_FFFF,
    ]);

    let mut out = String::new();
    let mut seen = BTreeSet::new();
    for w in inputs {
        let lit = literal(f32::from_bits(w));
        if !seen.insert(lit.clone()) {
            continue;
        }
        // only keep literals that parse back to the same bit pattern
        if !matches!(lit.as_str(), "NaN" | "inf" | "-inf")
            && lit.parse::<f32>().map(f32::to_bits) != Ok(w)
        {
            continue;
        }
        let byte = F8::<E>::from_f32(f32::from_bits(w)).to_bits();
        out.push_str(&format!("{lit},{byte:08b}\n"));
    }
    fs::write(dir.join(format!("f32_to_f8_{name}.csv")), out)?;

    println!("wrote vectors for 1-{E}-{f}");
    Ok(())
}

fn main() -> io::Result<()> {
    let dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/data");
    fs::create_dir_all(&dir)?;

    write_config::<1>(&dir)?;
    write_config::<2>(&dir)?;
    write_config::<3>(&dir)?;
    write_config::<4>(&dir)?;
    write_config::<5>(&dir)?;
    write_config::<6>(&dir)?;
    Ok(())
}
