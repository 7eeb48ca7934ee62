use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};

/// Minimal deterministic PRNG (xoshiro256**)
struct SimpleRng {
    state: [u64; 4],
}

impl SimpleRng {
    fn new(seed: u64) -> Self {
        let mut s = [0u64; 4];
        let mut x = seed;
        for slot in &mut s {
            x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
            *slot = x;
        }
        SimpleRng { state: s }
    }

    fn next_u64(&mut self) -> u64 {
        let result = (self.state[1].wrapping_mul(5))
            .rotate_left(7)
            .wrapping_mul(9);
        let t = self.state[1] << 17;
        self.state[2] ^= self.state[0];
        self.state[3] ^= self.state[1];
        self.state[1] ^= self.state[2];
        self.state[0] ^= self.state[3];
        self.state[2] ^= t;
        self.state[3] = self.state[3].rotate_left(45);
        result
    }

    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    /// Uniform value in `[lo, hi)`, rounded to `decimals` places.
    fn range(&mut self, lo: f64, hi: f64, decimals: i32) -> f64 {
        let scale = 10f64.powi(decimals);
        ((lo + (hi - lo) * self.next_f64()) * scale).round() / scale
    }
}

const PRODUCTS: [&str; 10] = [
    "Говядина", "Свинина", "Курица", "Гречка", "Рис", "Сахар", "Чай", "Кофе", "Масло", "Сыр",
];

/// Header layout and number style of one generated file.
struct Layout {
    file: &'static str,
    header: &'static str,
    comma_decimals: bool,
}

const LAYOUTS: [Layout; 3] = [
    Layout {
        file: "price_1.csv",
        header: "№,название,цена,вес",
        comma_decimals: false,
    },
    Layout {
        file: "Price_2.csv",
        header: "номер, Товар ,Розница,Масса",
        comma_decimals: true,
    },
    Layout {
        file: "price_3.csv",
        header: "код,наименование,примечание,розница,фасовка",
        comma_decimals: false,
    },
];

fn number(value: f64, comma: bool) -> String {
    if comma {
        format!("\"{}\"", value.to_string().replace('.', ","))
    } else {
        value.to_string()
    }
}

fn main() -> Result<()> {
    let out_dir = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("sample_prices"));
    fs::create_dir_all(&out_dir).with_context(|| format!("creating {}", out_dir.display()))?;

    let mut rng = SimpleRng::new(42);
    let mut total_rows = 0usize;

    for layout in &LAYOUTS {
        let mut text = format!("{}\n", layout.header);
        let extra_cols = layout.header.split(',').count() - 3;

        for (i, product) in PRODUCTS.iter().enumerate() {
            let price = rng.range(50.0, 900.0, 2);
            let weight = rng.range(0.1, 5.0, 1);
            let mut fields = vec![(i + 1).to_string()];
            fields.push(product.to_string());
            if extra_cols > 1 {
                fields.push(String::new());
            }
            fields.push(number(price, layout.comma_decimals));
            fields.push(number(weight, layout.comma_decimals));
            text.push_str(&fields.join(","));
            text.push('\n');
            total_rows += 1;
        }

        // Rows the loader is expected to drop.
        text.push_str("99,Пустой вес\n");
        text.push_str(&format!("98,Без цены,{}n/a,1\n", ",".repeat(extra_cols - 1)));
        text.push_str(&format!("97,Нулевой вес,{}10,0\n", ",".repeat(extra_cols - 1)));

        let path = out_dir.join(layout.file);
        fs::write(&path, text).with_context(|| format!("writing {}", path.display()))?;
    }

    // Lacks a weight column: skipped with a warning.
    fs::write(out_dir.join("price_no_weight.csv"), "продукт,цена\nСоль,30\n")
        .context("writing price_no_weight.csv")?;
    // No marker in the name: never opened.
    fs::write(out_dir.join("catalog.csv"), "товар,цена,вес\nПерец,100,1\n")
        .context("writing catalog.csv")?;

    println!(
        "Wrote {} price lists ({total_rows} valid rows) to {}",
        LAYOUTS.len() + 1,
        out_dir.display()
    );
    Ok(())
}
