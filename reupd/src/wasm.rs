#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn init_panic_hook() {
    console_error_panic_hook::set_once();
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen]
pub fn encode_audio_to_upd(audio_bytes: &[u8]) -> Result<Vec<u8>, JsValue> {
    crate::encode_from_audio(audio_bytes)
        .map(|encoded| encoded.data)
        .map_err(|e| JsValue::from_str(&format!("{:#}", e)))
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen]
pub fn encode_samples_to_upd(samples: &[i16], sample_rate: u32) -> Result<Vec<u8>, JsValue> {
    libupd7759::encode(samples, sample_rate).map_err(|e| JsValue::from_str(&e.to_string()))
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen]
pub fn upd_stream_info(data: &[u8]) -> Result<UpdInfo, JsValue> {
    let info = libupd7759::info(data).map_err(|e| JsValue::from_str(&e.to_string()))?;

    Ok(UpdInfo {
        sample_rate: info.sample_rate.hz(),
        marker: info.marker,
        data_bytes: info.data_bytes,
        max_codes: info.max_codes,
        duration_secs: info.duration_secs as f32,
    })
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen]
pub struct UpdInfo {
    sample_rate: u32,
    marker: u8,
    data_bytes: usize,
    max_codes: usize,
    duration_secs: f32,
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen]
impl UpdInfo {
    #[wasm_bindgen(getter)]
    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    #[wasm_bindgen(getter)]
    pub fn marker(&self) -> u8 {
        self.marker
    }

    #[wasm_bindgen(getter)]
    pub fn data_bytes(&self) -> usize {
        self.data_bytes
    }

    #[wasm_bindgen(getter)]
    pub fn max_codes(&self) -> usize {
        self.max_codes
    }

    #[wasm_bindgen(getter)]
    pub fn duration_secs(&self) -> f32 {
        self.duration_secs
    }
}
