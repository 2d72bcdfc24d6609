//! The mask pipeline.
//!
//! Derives ranges for a map, shows one mask per range, then the map itself,
//! then the last mask and a copy of the map filled under it.

use image::GrayImage;
use serde::Serialize;

use crate::display::DisplaySink;
use crate::error::Result;
use crate::threshold::{
    dividers, fill_mask, in_range_mask, mask_coverage, tri_ranges, value_histogram,
};
use crate::types::{Boundary, Legend, Range};

/// Knobs for a pipeline run.
#[derive(Debug, Clone, Default)]
pub struct PipelineOptions {
    pub boundary: Boundary,
    /// Intensity painted under the last mask in the fill preview.
    pub fill: u8,
    pub legend: Legend,
}

/// One range of the partition and what it selected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RegionSummary {
    pub label: String,
    pub low: u8,
    pub high: u8,
    /// Distinct intensities present in the map that fall in the range.
    pub values: Vec<u8>,
    /// Pixels selected by the range's mask.
    pub pixels: u64,
}

impl RegionSummary {
    pub fn range(&self) -> Range {
        Range {
            low: self.low,
            high: self.high,
        }
    }
}

/// Outcome of partitioning one map.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MapReport {
    pub width: u32,
    pub height: u32,
    pub boundary: Boundary,
    pub dividers: Vec<u8>,
    pub regions: Vec<RegionSummary>,
}

impl MapReport {
    /// Number of distinct intensities in the map.
    ///
    /// Every adjacent pair of values contributes one divider. Summing
    /// `regions[..].values` would count a value sitting on a shared divider
    /// twice.
    pub fn distinct_values(&self) -> usize {
        self.dividers.len() + 1
    }
}

/// Partition a map and summarise each region without showing anything.
pub fn analyze(img: &GrayImage, options: &PipelineOptions) -> Result<MapReport> {
    let ranges = tri_ranges(img, options.boundary)?;
    let histogram = value_histogram(img)?;
    let labels = options.legend.labels(&ranges);

    let regions = ranges
        .iter()
        .zip(labels)
        .map(|(range, label)| {
            let values: Vec<u8> = histogram
                .keys()
                .copied()
                .filter(|v| range.contains(*v))
                .collect();
            let pixels: u64 = histogram
                .range(range.low..=range.high)
                .map(|(_, n)| *n)
                .sum();
            RegionSummary {
                label,
                low: range.low,
                high: range.high,
                values,
                pixels,
            }
        })
        .collect();

    let values: Vec<u8> = histogram.keys().copied().collect();

    Ok(MapReport {
        width: img.width(),
        height: img.height(),
        boundary: options.boundary,
        dividers: dividers(&values),
        regions,
    })
}

/// Run the full pipeline, presenting every image on `sink`.
///
/// Display order: each region mask (titled by its label), the map
/// (`map`), the last region mask again (`mask`) and the map with the last
/// region painted in `options.fill` (`filled`). The source image is never
/// mutated.
pub fn run(
    img: &GrayImage,
    options: &PipelineOptions,
    sink: &mut dyn DisplaySink,
) -> Result<MapReport> {
    let report = analyze(img, options)?;

    let mut last_mask: Option<GrayImage> = None;
    for region in &report.regions {
        let mask = in_range_mask(img, region.range());
        debug_assert_eq!(mask_coverage(&mask), region.pixels);
        sink.show(&region.label, &mask)?;
        last_mask = Some(mask);
    }

    sink.show("map", img)?;

    if let Some(mask) = last_mask {
        let filled = fill_mask(img, &mask, options.fill)?;
        sink.show("mask", &mask)?;
        sink.show("filled", &filled)?;
    }

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::display::CaptureSink;
    use image::Luma;
    use pretty_assertions::assert_eq;

    fn conventional_map() -> GrayImage {
        // 0 obstacle, 205 unknown, 254 free
        GrayImage::from_raw(3, 2, vec![0, 205, 254, 254, 254, 0]).unwrap()
    }

    #[test]
    fn test_analyze_conventional_map() {
        let report = analyze(&conventional_map(), &PipelineOptions::default()).unwrap();

        assert_eq!(report.dividers, vec![102, 229]);
        assert_eq!(
            report.regions,
            vec![
                RegionSummary {
                    label: "obstacle".to_string(),
                    low: 0,
                    high: 102,
                    values: vec![0],
                    pixels: 2,
                },
                RegionSummary {
                    label: "unknown".to_string(),
                    low: 102,
                    high: 229,
                    values: vec![205],
                    pixels: 1,
                },
                RegionSummary {
                    label: "free".to_string(),
                    low: 229,
                    high: 254,
                    values: vec![254],
                    pixels: 3,
                },
            ]
        );
    }

    #[test]
    fn test_analyze_disjoint_dividers() {
        let options = PipelineOptions {
            boundary: Boundary::Disjoint,
            ..Default::default()
        };
        let report = analyze(&conventional_map(), &options).unwrap();

        assert_eq!(report.dividers, vec![102, 229]);
        assert_eq!(report.regions[1].range(), Range { low: 103, high: 229 });
    }

    #[test]
    fn test_analyze_adjacent_values_shared() {
        let img = GrayImage::from_raw(3, 1, vec![0, 1, 2]).unwrap();

        let report = analyze(&img, &PipelineOptions::default()).unwrap();

        assert_eq!(report.dividers, vec![0, 1]);
        let spans: Vec<(u8, u8, Vec<u8>)> = report
            .regions
            .iter()
            .map(|r| (r.low, r.high, r.values.clone()))
            .collect();
        assert_eq!(
            spans,
            vec![(0, 0, vec![0]), (0, 1, vec![0, 1]), (1, 2, vec![1, 2])]
        );
        assert_eq!(report.distinct_values(), 3);
    }

    #[test]
    fn test_distinct_values_single_value() {
        let img = GrayImage::from_pixel(2, 2, Luma([205]));
        let report = analyze(&img, &PipelineOptions::default()).unwrap();
        assert_eq!(report.distinct_values(), 1);
    }

    #[test]
    fn test_run_display_order() {
        let mut sink = CaptureSink::new();
        run(&conventional_map(), &PipelineOptions::default(), &mut sink).unwrap();

        assert_eq!(
            sink.titles(),
            vec!["obstacle", "unknown", "free", "map", "mask", "filled"]
        );
    }

    #[test]
    fn test_run_fills_last_region() {
        let img = conventional_map();
        let options = PipelineOptions {
            fill: 9,
            ..Default::default()
        };
        let mut sink = CaptureSink::new();

        run(&img, &options, &mut sink).unwrap();

        let (_, free_mask) = &sink.frames[2];
        assert_eq!(free_mask.as_raw(), &vec![0, 0, 255, 255, 255, 0]);

        let (_, filled) = &sink.frames[5];
        assert_eq!(filled.as_raw(), &vec![0, 205, 9, 9, 9, 0]);

        // Source untouched
        assert_eq!(img.as_raw(), &vec![0, 205, 254, 254, 254, 0]);
    }

    #[test]
    fn test_run_single_value_map() {
        let img = GrayImage::from_pixel(4, 4, Luma([205]));
        let mut sink = CaptureSink::new();

        let report = run(&img, &PipelineOptions::default(), &mut sink).unwrap();

        assert!(report.dividers.is_empty());
        assert_eq!(report.regions.len(), 1);
        assert_eq!(report.regions[0].range(), Range::single(205));
        assert_eq!(sink.titles(), vec!["unknown", "map", "mask", "filled"]);
    }

    #[test]
    fn test_run_empty_map() {
        let mut sink = CaptureSink::new();
        assert!(run(&GrayImage::new(0, 0), &PipelineOptions::default(), &mut sink).is_err());
        assert!(sink.frames.is_empty());
    }
}
