//! Demo program exercising the sample statistics library.
//!
//! Built as a normal host binary; the build pipeline's post-build hook
//! runs it straight from the build directory.

use samplestats::SampleBuffer;

fn print_milli(label: &str, milli: i64) {
    println!("{label}: {milli} (actual: {}.{:03})", milli / 1000, milli % 1000);
}

fn main() {
    let mut series: SampleBuffer<u8, 4> = SampleBuffer::new();
    for v in [1u8, 21, 79, 100, 31, 85] {
        series.push(v);
    }

    // The window holds the newest four samples: {31, 85, 79, 100}.
    println!("--- u8 samples ---");
    println!("Max: {}", series.max().unwrap_or(0));
    println!("Min: {}", series.min().unwrap_or(0));
    print_milli("Mean", series.mean_milli().unwrap_or(0));
    print_milli("Variance", series.variance_milli().unwrap_or(0));
    print_milli("Stdev", series.stdev_milli().unwrap_or(0));

    let mut series_f: SampleBuffer<f32, 4> = SampleBuffer::new();
    for v in [1.5f32, 21.3, 79.7, 100.2] {
        series_f.push(v);
    }

    println!("\n--- f32 samples ---");
    println!("Max: {:.2}", series_f.max().unwrap_or(0.0));
    println!("Min: {:.2}", series_f.min().unwrap_or(0.0));
    println!("Mean: {:.2}", series_f.mean().unwrap_or(0.0));
    println!("Variance: {:.2}", series_f.variance().unwrap_or(0.0));
    println!("Stdev: {:.2}", series_f.stdev().unwrap_or(0.0));
}
