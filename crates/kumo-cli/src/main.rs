use kumo::render::raster::{RasterError, RasterOptions};
use kumo::render::{HeadlessCloud, Mode, SvgRenderOptions};
use kumo::{AspectRatio, ColorRule, Spiral};
use std::io::Read;
use std::str::FromStr;

#[derive(Debug)]
enum CliError {
    Usage(&'static str),
    Io(std::io::Error),
    Core(kumo::Error),
    Raster(RasterError),
    Json(serde_json::Error),
    NoWords,
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CliError::Usage(msg) => write!(f, "{msg}"),
            CliError::Io(err) => write!(f, "I/O error: {err}"),
            CliError::Core(err) => write!(f, "{err}"),
            CliError::Raster(err) => write!(f, "{err}"),
            CliError::Json(err) => write!(f, "JSON error: {err}"),
            CliError::NoWords => write!(f, "No countable words in input"),
        }
    }
}

impl From<std::io::Error> for CliError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<kumo::Error> for CliError {
    fn from(value: kumo::Error) -> Self {
        Self::Core(value)
    }
}

impl From<RasterError> for CliError {
    fn from(value: RasterError) -> Self {
        Self::Raster(value)
    }
}

impl From<serde_json::Error> for CliError {
    fn from(value: serde_json::Error) -> Self {
        Self::Json(value)
    }
}

#[derive(Debug, Clone, Copy, Default)]
enum Command {
    #[default]
    Freq,
    Layout,
    Render,
    Csv,
}

#[derive(Debug, Clone, Copy, Default)]
enum RenderFormat {
    #[default]
    Svg,
    Png,
    Jpeg,
}

impl FromStr for RenderFormat {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "svg" => Ok(Self::Svg),
            "png" => Ok(Self::Png),
            "jpg" | "jpeg" => Ok(Self::Jpeg),
            _ => Err(()),
        }
    }
}

#[derive(Debug, Default)]
struct Args {
    command: Command,
    input: Option<String>,
    pretty: bool,
    mode: Option<Mode>,
    width: f64,
    height: Option<f64>,
    seed: Option<u64>,
    max_words: Option<u32>,
    min_token_len: Option<usize>,
    aspect: Option<AspectRatio>,
    color_rule: Option<ColorRule>,
    scheme: Option<String>,
    spiral: Option<Spiral>,
    stopwords_path: Option<String>,
    dict_path: Option<String>,
    render_format: RenderFormat,
    render_scale: f32,
    background: Option<String>,
    out: Option<String>,
}

fn usage() -> &'static str {
    "kumo\n\
\n\
USAGE:\n\
  kumo [freq] [--pretty] [--max-words <n>] [--min-token-len <n>] [--stopwords <path>] [--dict <path>] [<path>|-]\n\
  kumo layout [--pretty] [--mode cloud|bubble] [--width <w>] [--height <h>] [--aspect square|portrait|landscape] [--seed <n>] [--max-words <n>] [--min-token-len <n>] [--color-rule frequency|pos|scheme] [--scheme vivid|sunset|forest|mono] [--spiral archimedean|rectangular] [--stopwords <path>] [--dict <path>] [<path>|-]\n\
  kumo render [--format svg|png|jpg] [--scale <n>] [--background <css-color>] [--mode cloud|bubble] [--width <w>] [--height <h>] [--aspect square|portrait|landscape] [--seed <n>] [--max-words <n>] [--min-token-len <n>] [--color-rule frequency|pos|scheme] [--scheme vivid|sunset|forest|mono] [--spiral archimedean|rectangular] [--stopwords <path>] [--dict <path>] [--out <path>] [<path>|-]\n\
  kumo csv [--max-words <n>] [--min-token-len <n>] [--stopwords <path>] [--dict <path>] [--out <path>] [<path>|-]\n\
\n\
NOTES:\n\
  - If <path> is omitted or '-', input is read from stdin.\n\
  - Without --height, the canvas height follows the --aspect ratio.\n\
  - freq prints the ranked word list as JSON.\n\
  - layout prints placed words (positions, font sizes, colors) as JSON.\n\
  - render prints SVG to stdout by default; use --out to write a file.\n\
  - PNG output defaults to writing next to the input file (or ./out.png for stdin).\n\
  - JPG output defaults to writing next to the input file (or ./out.jpg for stdin).\n\
  - Without --seed, cloud layouts vary between runs.\n\
"
}

fn parse_args(argv: &[String]) -> Result<Args, CliError> {
    let mut args = Args {
        command: Command::Freq,
        width: 800.0,
        render_scale: 1.0,
        ..Default::default()
    };

    let mut it = argv.iter().skip(1).peekable();
    while let Some(a) = it.next() {
        match a.as_str() {
            "--help" | "-h" => return Err(CliError::Usage(usage())),
            "freq" => args.command = Command::Freq,
            "layout" => args.command = Command::Layout,
            "render" => args.command = Command::Render,
            "csv" => args.command = Command::Csv,
            "--pretty" => args.pretty = true,
            "--mode" => {
                let Some(mode) = it.next() else {
                    return Err(CliError::Usage(usage()));
                };
                args.mode = Some(mode.parse::<Mode>().map_err(|_| CliError::Usage(usage()))?);
            }
            "--width" => {
                let Some(w) = it.next() else {
                    return Err(CliError::Usage(usage()));
                };
                args.width = w.parse::<f64>().map_err(|_| CliError::Usage(usage()))?;
                if !(args.width.is_finite() && args.width > 0.0) {
                    return Err(CliError::Usage(usage()));
                }
            }
            "--height" => {
                let Some(h) = it.next() else {
                    return Err(CliError::Usage(usage()));
                };
                let height = h.parse::<f64>().map_err(|_| CliError::Usage(usage()))?;
                if !(height.is_finite() && height > 0.0) {
                    return Err(CliError::Usage(usage()));
                }
                args.height = Some(height);
            }
            "--aspect" => {
                let Some(aspect) = it.next() else {
                    return Err(CliError::Usage(usage()));
                };
                args.aspect = Some(match aspect.trim().to_ascii_lowercase().as_str() {
                    "square" => AspectRatio::Square,
                    "portrait" => AspectRatio::Portrait,
                    "landscape" => AspectRatio::Landscape,
                    _ => return Err(CliError::Usage(usage())),
                });
            }
            "--seed" => {
                let Some(seed) = it.next() else {
                    return Err(CliError::Usage(usage()));
                };
                args.seed = Some(seed.parse::<u64>().map_err(|_| CliError::Usage(usage()))?);
            }
            "--max-words" => {
                let Some(n) = it.next() else {
                    return Err(CliError::Usage(usage()));
                };
                args.max_words = Some(n.parse::<u32>().map_err(|_| CliError::Usage(usage()))?);
            }
            "--min-token-len" => {
                let Some(n) = it.next() else {
                    return Err(CliError::Usage(usage()));
                };
                args.min_token_len =
                    Some(n.parse::<usize>().map_err(|_| CliError::Usage(usage()))?);
            }
            "--color-rule" => {
                let Some(rule) = it.next() else {
                    return Err(CliError::Usage(usage()));
                };
                args.color_rule = Some(match rule.trim().to_ascii_lowercase().as_str() {
                    "frequency" => ColorRule::Frequency,
                    "pos" => ColorRule::Pos,
                    "scheme" => ColorRule::Scheme,
                    _ => return Err(CliError::Usage(usage())),
                });
            }
            "--scheme" => {
                let Some(scheme) = it.next() else {
                    return Err(CliError::Usage(usage()));
                };
                args.scheme = Some(scheme.trim().to_ascii_lowercase());
            }
            "--spiral" => {
                let Some(spiral) = it.next() else {
                    return Err(CliError::Usage(usage()));
                };
                args.spiral = Some(match spiral.trim().to_ascii_lowercase().as_str() {
                    "archimedean" => Spiral::Archimedean,
                    "rectangular" => Spiral::Rectangular,
                    _ => return Err(CliError::Usage(usage())),
                });
            }
            "--stopwords" => {
                let Some(path) = it.next() else {
                    return Err(CliError::Usage(usage()));
                };
                args.stopwords_path = Some(path.clone());
            }
            "--dict" => {
                let Some(path) = it.next() else {
                    return Err(CliError::Usage(usage()));
                };
                args.dict_path = Some(path.clone());
            }
            "--format" => {
                let Some(fmt) = it.next() else {
                    return Err(CliError::Usage(usage()));
                };
                args.render_format = fmt
                    .parse::<RenderFormat>()
                    .map_err(|_| CliError::Usage(usage()))?;
            }
            "--scale" => {
                let Some(scale) = it.next() else {
                    return Err(CliError::Usage(usage()));
                };
                args.render_scale = scale.parse::<f32>().map_err(|_| CliError::Usage(usage()))?;
                if !(args.render_scale.is_finite() && args.render_scale > 0.0) {
                    return Err(CliError::Usage(usage()));
                }
            }
            "--background" => {
                let Some(bg) = it.next() else {
                    return Err(CliError::Usage(usage()));
                };
                if !bg.trim().is_empty() {
                    args.background = Some(bg.trim().to_string());
                }
            }
            "--out" => {
                let Some(out) = it.next() else {
                    return Err(CliError::Usage(usage()));
                };
                args.out = Some(out.clone());
            }
            "--" => {
                if let Some(rest) = it.next() {
                    if args.input.is_some() {
                        return Err(CliError::Usage(usage()));
                    }
                    args.input = Some(rest.clone());
                }
                while it.next().is_some() {
                    return Err(CliError::Usage(usage()));
                }
            }
            other if other.starts_with('-') && other != "-" => {
                return Err(CliError::Usage(usage()));
            }
            path => {
                if args.input.is_some() {
                    return Err(CliError::Usage(usage()));
                }
                args.input = Some(path.to_string());
            }
        }
    }

    Ok(args)
}

fn read_input(input: Option<&str>) -> Result<String, CliError> {
    match input {
        None | Some("-") => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
        Some(path) => Ok(std::fs::read_to_string(path)?),
    }
}

fn write_json(value: &impl serde::Serialize, pretty: bool) -> Result<(), CliError> {
    if pretty {
        serde_json::to_writer_pretty(std::io::stdout().lock(), value)?;
    } else {
        serde_json::to_writer(std::io::stdout().lock(), value)?;
    }
    Ok(())
}

fn write_text(text: &str, out: Option<&str>) -> Result<(), CliError> {
    match out {
        None => {
            print!("{text}");
            Ok(())
        }
        Some(path) => {
            std::fs::write(path, text)?;
            Ok(())
        }
    }
}

fn write_bytes(bytes: &[u8], out: &str) -> Result<(), CliError> {
    if out == "-" {
        use std::io::Write;
        std::io::stdout().lock().write_all(bytes)?;
    } else {
        std::fs::write(out, bytes)?;
    }
    Ok(())
}

fn default_raster_out_path(input: Option<&str>, ext: &str) -> std::path::PathBuf {
    match input {
        Some(path) if path != "-" => std::path::PathBuf::from(path).with_extension(ext),
        _ => std::path::PathBuf::from(format!("out.{ext}")),
    }
}

fn build_cloud(args: &Args) -> Result<HeadlessCloud, CliError> {
    let mut settings = kumo::CloudSettings::default();
    if let Some(max_words) = args.max_words {
        settings.max_words = max_words;
    }
    if let Some(aspect) = args.aspect {
        settings.aspect_ratio = aspect;
    }
    if let Some(rule) = args.color_rule {
        settings.color_rule = rule;
    }
    if let Some(scheme) = &args.scheme {
        settings.color_scheme_id = scheme.clone();
    }
    if let Some(spiral) = args.spiral {
        settings.spiral = spiral;
    }

    let mut cloud = HeadlessCloud::new().with_settings(settings);
    if let Some(min_len) = args.min_token_len {
        cloud.min_token_length = min_len;
    }
    if let Some(seed) = args.seed {
        cloud = cloud.with_seed(seed);
    }
    if let Some(dict) = &args.dict_path {
        cloud = cloud.with_dictionary_path(std::path::Path::new(dict))?;
    }
    Ok(cloud)
}

fn read_stopwords(args: &Args) -> Result<String, CliError> {
    match &args.stopwords_path {
        Some(path) => Ok(std::fs::read_to_string(path)?),
        None => Ok(String::new()),
    }
}

fn run(args: Args) -> Result<(), CliError> {
    let text = read_input(args.input.as_deref())?;
    let cloud = build_cloud(&args)?;
    let stopwords_text = read_stopwords(&args)?;
    let mode = args.mode.unwrap_or(Mode::Cloud);

    match args.command {
        Command::Freq => {
            let words = cloud.frequencies(&text, &stopwords_text);
            if words.is_empty() {
                return Err(CliError::NoWords);
            }
            write_json(&words, args.pretty)?;
            Ok(())
        }
        Command::Layout => {
            let words = cloud.frequencies(&text, &stopwords_text);
            if words.is_empty() {
                return Err(CliError::NoWords);
            }
            let height = args.height.unwrap_or_else(|| cloud.canvas_height(args.width));
            let placed = cloud.layout_words(&words, args.width, height, mode);
            write_json(&placed, args.pretty)?;
            Ok(())
        }
        Command::Csv => {
            let words = cloud.frequencies(&text, &stopwords_text);
            if words.is_empty() {
                return Err(CliError::NoWords);
            }
            let csv = kumo::render::export_csv(&words);
            write_text(&csv, args.out.as_deref())?;
            Ok(())
        }
        Command::Render => {
            let words = cloud.frequencies(&text, &stopwords_text);
            if words.is_empty() {
                return Err(CliError::NoWords);
            }
            let height = args.height.unwrap_or_else(|| cloud.canvas_height(args.width));
            let placed = cloud.layout_words(&words, args.width, height, mode);

            let mut svg_options = match mode {
                Mode::Bubble => SvgRenderOptions::bubble(),
                Mode::Cloud => SvgRenderOptions::default(),
            };
            svg_options.background = args.background.clone();
            let svg = kumo::render::render_svg(&placed, args.width, height, &svg_options);

            match args.render_format {
                RenderFormat::Svg => {
                    write_text(&svg, args.out.as_deref())?;
                }
                RenderFormat::Png => {
                    let raster = RasterOptions {
                        scale: args.render_scale,
                        background: args.background.clone(),
                        ..Default::default()
                    };
                    let bytes = kumo::render::raster::svg_to_png(&svg, &raster)?;
                    let out = args.out.clone().unwrap_or_else(|| {
                        default_raster_out_path(args.input.as_deref(), "png")
                            .to_string_lossy()
                            .to_string()
                    });
                    write_bytes(&bytes, &out)?;
                }
                RenderFormat::Jpeg => {
                    let raster = RasterOptions {
                        scale: args.render_scale,
                        background: args.background.clone(),
                        ..Default::default()
                    };
                    let bytes = kumo::render::raster::svg_to_jpeg(&svg, &raster)?;
                    let out = args.out.clone().unwrap_or_else(|| {
                        default_raster_out_path(args.input.as_deref(), "jpg")
                            .to_string_lossy()
                            .to_string()
                    });
                    write_bytes(&bytes, &out)?;
                }
            }
            Ok(())
        }
    }
}

fn main() {
    let args = match parse_args(&std::env::args().collect::<Vec<_>>()) {
        Ok(v) => v,
        Err(CliError::Usage(msg)) => {
            eprintln!("{msg}");
            std::process::exit(2);
        }
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(1);
        }
    };

    match run(args) {
        Ok(()) => {}
        Err(CliError::NoWords) => {
            eprintln!("{}", CliError::NoWords);
            std::process::exit(3);
        }
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(1);
        }
    }
}
