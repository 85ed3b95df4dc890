use std::path::PathBuf;

use argh::FromArgs;

use filtra::imgproc::filter::{convolve, kernels};
use filtra::imgproc::parallel::ExecutionStrategy;
use filtra::io::functional::{read_image_any, GenericImage};
use filtra::io::png::{
    write_image_png_gray8, write_image_png_graya8, write_image_png_rgb8, write_image_png_rgba8,
};

/// Where the filtered image lands, relative to the working directory.
const OUTPUT_PATH: &str = "output.png";

#[derive(FromArgs)]
/// Apply a convolution filter to an image and save the result as output.png
struct Args {
    /// path to the input image
    #[argh(positional)]
    input: PathBuf,

    /// filter to apply (edge, sharpen, blur, gaussian, emboss, identity)
    #[argh(positional)]
    filter: String,

    /// row scheduling strategy: dynamic, fixed or serial
    #[argh(option, default = "String::from(\"dynamic\")")]
    strategy: String,

    /// worker threads for the fixed strategy
    #[argh(option, short = 'j')]
    jobs: Option<usize>,
}

fn resolve_strategy(
    name: &str,
    jobs: Option<usize>,
) -> Result<ExecutionStrategy, Box<dyn std::error::Error>> {
    let strategy = match name {
        "dynamic" => ExecutionStrategy::Dynamic,
        "serial" => ExecutionStrategy::Serial,
        "fixed" => {
            let workers = match jobs {
                Some(n) => n,
                None => std::thread::available_parallelism()?.get(),
            };
            ExecutionStrategy::Fixed(workers)
        }
        other => {
            return Err(
                format!("unknown strategy \"{other}\" (expected dynamic, fixed or serial)").into(),
            )
        }
    };
    Ok(strategy)
}

fn run(args: Args) -> Result<(), Box<dyn std::error::Error>> {
    let kernel = kernels::lookup(&args.filter)
        .map_err(|e| format!("{e} (available: {})", kernels::FILTER_NAMES.join(", ")))?;
    let strategy = resolve_strategy(&args.strategy, args.jobs)?;

    let image = read_image_any(&args.input)?;
    log::info!(
        "loaded {} with {} channels from {}",
        image.size(),
        image.num_channels(),
        args.input.display()
    );

    match image {
        GenericImage::L8(img) => {
            write_image_png_gray8(OUTPUT_PATH, &convolve(&img, &kernel, strategy)?)?;
        }
        GenericImage::La8(img) => {
            write_image_png_graya8(OUTPUT_PATH, &convolve(&img, &kernel, strategy)?)?;
        }
        GenericImage::Rgb8(img) => {
            write_image_png_rgb8(OUTPUT_PATH, &convolve(&img, &kernel, strategy)?)?;
        }
        GenericImage::Rgba8(img) => {
            write_image_png_rgba8(OUTPUT_PATH, &convolve(&img, &kernel, strategy)?)?;
        }
    }

    log::info!(
        "applied {} under {:?} scheduling, saved {OUTPUT_PATH}",
        args.filter,
        strategy
    );

    Ok(())
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args: Args = argh::from_env();
    if let Err(e) = run(args) {
        log::error!("{e}");
        std::process::exit(1);
    }
}
