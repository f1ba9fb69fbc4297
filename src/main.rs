use macrochain::{NestedProduct, Program};
use tracing::{debug, error};
use tracing_subscriber::EnvFilter;

fn result() -> i32 {
  let evaluated = Program::embedded().and_then(|program| {
    for (name, power) in program.layer_powers() {
      match power {
        Some(power) => debug!(name, power, "macro layer"),
        None => debug!(name, "macro layer is not a power of its argument"),
      }
    }

    program.evaluate::<i32>()
  });

  match evaluated {
    Ok(value) => value,
    Err(err) => {
      error!(%err, "failed to evaluate embedded program, computing chain directly");
      NestedProduct::FIXTURE.evaluate()
    },
  }
}

fn main() {
  tracing_subscriber::fmt()
    .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
    .with_writer(std::io::stderr)
    .init();

  println!("Result: {}", result());
}
