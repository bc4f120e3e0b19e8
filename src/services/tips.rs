//! Tip-of-the-day strings shown under the clock.

use rand::Rng;

static TIPS: &[&str] = &[
    "검색창에서 ↑/↓ 키로 검색 엔진을 바꿀 수 있습니다.",
    "아무 키나 누르면 검색창에 바로 입력됩니다.",
    "설정에서 배경 이미지를 여러 장 고르면 탭을 열 때마다 무작위로 바뀝니다.",
    "배경 초기화를 누르면 저장된 이미지가 모두 지워지고 단색 배경으로 돌아갑니다.",
    "설정 내보내기로 검색 엔진과 배경을 zip 파일 하나로 백업할 수 있습니다.",
    "검색 엔진 주소에 (query) 자리를 넣으면 그 위치에 검색어가 들어갑니다.",
    "주소가 /로 끝나는 엔진은 검색어가 문서 경로 뒤에 그대로 붙습니다.",
    "블러 효과가 무거우면 설정에서 끌 수 있습니다.",
];

/// Picks one tip uniformly at random.
pub fn pick<R: Rng>(rng: &mut R) -> &'static str {
    TIPS[rng.gen_range(0..TIPS.len())]
}
