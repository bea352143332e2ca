//! Fixed GraphQL documents sent to the gateway.

/// Paginated bid or ask levels for one variant.
///
/// Variables: `product_uuid`, `transactionType`, `country`, `currency_code`, `page`.
pub const GET_VARIANT_PRICE_LEVELS: &str = r"
query GetVariantPriceLevels(
  $product_uuid: String!,
  $transactionType: TransactionType!,
  $country: String!,
  $currency_code: CurrencyCode!,
  $page: Int
) {
  variant(id: $product_uuid) {
    __typename
    market(currencyCode: $currency_code) {
      __typename
      priceLevels(
        country: $country,
        page: $page,
        transactionType: $transactionType
      ) {
        __typename
        edges {
          __typename
          node {
            __typename
            amount
            count
            variant {
              __typename
              id
              traits {
                __typename
                size
              }
            }
          }
        }
        pageInfo {
          __typename
          page
          count
          total
          hasNextPage
        }
      }
    }
  }
}
";

/// Every variant sharing a GTIN, with product, size chart, and market state.
///
/// Variables: `gtin`, `currencyCode`, `country`, `market`.
pub const FETCH_VARIANTS_FROM_GTIN: &str = r"
query FetchVariantsFromGTIN($gtin: String!, $currencyCode: CurrencyCode, $country: String!, $market: String) {
  variants(gtin: $gtin) {
    __typename
    id
    sizeChart {
      __typename
      baseSize
      baseType
      displayOptions {
        __typename
        size
        type
      }
    }
    product {
      __typename
      id
      primaryCategory
      primaryTitle
      secondaryTitle
      styleId
      title
      productCategory
      listingType
      defaultSizeConversion {
        __typename
        name
        type
      }
      brand
      uuid
      urlKey
      media {
        __typename
        imageUrl
        smallImageUrl
      }
      traits {
        __typename
        format
        name
        value
        visible
      }
    }
    market(currencyCode: $currencyCode) {
      __typename
      state(country: $country, market: $market) {
        __typename
        lowestAsk {
          __typename
          amount
        }
        highestBid {
          __typename
          amount
        }
      }
    }
    traits {
      __typename
      sizeDescriptor
      size
    }
  }
}
";
